//! polarscope CLI for comparing sentiment models on a review table.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polarscope::analysis::{
    agreement_flags, compare_columns, model_leaderboard, rank_models, summarize_agreement,
    Agreement, AnalysisError, MetricKind,
};
use polarscope::data::{embedding, load_table, review, EmbeddingKind, RowTable};

use crate::config::PolarscopeConfig;

#[derive(Parser)]
#[command(name = "polarscope")]
#[command(author, version)]
#[command(about = "Compare sentiment models on a labeled review table")]
#[command(long_about = "polarscope: confusion matrices, classification metrics and Cohen's Kappa
between any two label columns of a review CSV.

The CSV must contain a 'polarity' column (1 = negative, 2 = positive) and at
least one '<model>_sentiment_code' column using the same encoding.

EXAMPLES:
  # List the selectable label columns
  polarscope --data reviews.csv models

  # Compare a model against the ground truth
  polarscope compare --rows polarity --cols 'gemma2:2b_sentiment_code'

  # Rank all models by Cohen's Kappa
  polarscope leaderboard --metric kappa

  # Inspect one review
  polarscope review --index 42")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Review table: a CSV path or an http(s) URL [default: reviews.csv]
    #[arg(long, value_name = "PATH|URL", global = true)]
    data: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable label columns
    Models,
    /// Confusion matrix and metrics for two label columns
    Compare {
        /// Row selector column
        #[arg(long, value_name = "COLUMN")]
        rows: String,

        /// Column selector column
        #[arg(long, value_name = "COLUMN")]
        cols: String,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },
    /// Score every model against polarity
    Leaderboard {
        /// Ranking metric: accuracy, f1, sensitivity, specificity, kappa
        #[arg(long, value_name = "METRIC")]
        metric: Option<String>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },
    /// Show the text and labels of one review
    Review {
        /// Row index (0-based)
        #[arg(long, value_name = "N")]
        index: usize,
    },
    /// Per-review agreement between two label columns
    Agreement {
        /// First column
        #[arg(long, value_name = "COLUMN")]
        a: String,

        /// Second column
        #[arg(long, value_name = "COLUMN")]
        b: String,

        /// Also report plottable points of this projection: pca, umap
        #[arg(long, value_name = "KIND")]
        embedding: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(log_level))
        .init();

    let mut config = PolarscopeConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_source = data;
    }

    let table = load_table(&config.data_source)
        .with_context(|| format!("Failed to load review table from {}", config.data_source))?;
    tracing::info!("Loaded {} reviews from {}", table.len(), config.data_source);

    match cli.command {
        Commands::Models => handle_models(&table),
        Commands::Compare { rows, cols, json } => handle_compare(&table, &rows, &cols, json),
        Commands::Leaderboard { metric, json } => {
            let metric = match metric {
                Some(m) => m.parse::<MetricKind>()?,
                None => config.default_metric,
            };
            handle_leaderboard(&table, metric, json)
        }
        Commands::Review { index } => handle_review(&table, index, &config),
        Commands::Agreement { a, b, embedding } => {
            let kind = embedding
                .map(|e| e.parse::<EmbeddingKind>())
                .transpose()?;
            handle_agreement(&table, &a, &b, kind, &config)
        }
    }
}

fn handle_models(table: &RowTable) -> Result<()> {
    println!("Label columns ({} reviews):\n", table.len());
    for column in table.label_columns() {
        println!("  {:<24} {}", column.display_name, column.column);
    }
    Ok(())
}

fn handle_compare(table: &RowTable, rows: &str, cols: &str, json: bool) -> Result<()> {
    let cmp = match compare_columns(table, rows, cols) {
        Ok(cmp) => cmp,
        Err(AnalysisError::NoComparablePairs { row, col }) => {
            println!("No valid sentiment pairs found for '{}' x '{}'", row, col);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let formatted = cmp.metrics.formatted();

    if json {
        let out = json!({
            "rows": cmp.row_column,
            "cols": cmp.col_column,
            "matrix": cmp.matrix,
            "total_comparisons": cmp.comparable_pairs,
            "metrics": formatted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Rows:    {}", cmp.row_column);
    println!("Columns: {}", cmp.col_column);
    println!("Comparable pairs: {}\n", cmp.comparable_pairs);
    println!("{}", cmp.matrix.to_string_table());
    print!("{}", formatted);
    Ok(())
}

fn handle_leaderboard(table: &RowTable, metric: MetricKind, json: bool) -> Result<()> {
    let mut scores = model_leaderboard(table)?;
    rank_models(&mut scores, metric);

    if json {
        let out: Vec<_> = scores
            .iter()
            .map(|s| {
                json!({
                    "model": s.model,
                    "column": s.column,
                    "total_comparisons": s.comparable_pairs,
                    "metrics": s.metrics.formatted(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Models ranked by {}:\n", metric.label());
    println!("{:>4}  {:<28} {:>9} {:>9}", "#", "model", metric.key(), "pairs");
    println!("{}", "─".repeat(54));
    for (rank, score) in scores.iter().enumerate() {
        let formatted = score.metrics.formatted();
        println!(
            "{:>4}  {:<28} {:>9} {:>9}",
            rank + 1,
            score.model,
            formatted.display(metric),
            score.comparable_pairs
        );
    }
    Ok(())
}

fn handle_review(table: &RowTable, index: usize, config: &PolarscopeConfig) -> Result<()> {
    let row = table.row(index)?;

    match review::review_text(row, &config.text_column) {
        Some(text) => println!("{}\n", text),
        None => println!("(no '{}' column)\n", config.text_column),
    }
    for entry in review::review_labels(row) {
        let verdict = entry
            .label
            .sentiment()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("({})", entry.label));
        println!("  {:<24} {}", entry.model, verdict);
    }
    Ok(())
}

fn handle_agreement(
    table: &RowTable,
    a: &str,
    b: &str,
    kind: Option<EmbeddingKind>,
    config: &PolarscopeConfig,
) -> Result<()> {
    let flags = agreement_flags(table, a, b)?;
    let summary = summarize_agreement(&flags);

    println!("{} vs {}", a, b);
    println!("  agree:        {}", summary.agree);
    println!("  disagree:     {}", summary.disagree);
    println!("  incomparable: {}", summary.incomparable);
    match polarscope::analysis::format_metric(summary.rate) {
        Some(rate) => println!("  rate:         {}", rate),
        None => println!("  rate:         N/A"),
    }

    if let Some(kind) = kind {
        let missing = embedding::missing_embedding_columns(table, &config.embedding_prefix);
        if !missing.is_empty() {
            bail!("Missing required columns: {}", missing.join(", "));
        }
        let points = embedding::embedding_points(table, &config.embedding_prefix, kind)?;
        let disagreeing = points
            .iter()
            .filter(|p| flags[p.row] == Agreement::Disagree)
            .count();
        println!(
            "\n{} points: {} plottable, {} disagreeing",
            kind,
            points.len(),
            disagreeing
        );
    }
    Ok(())
}
