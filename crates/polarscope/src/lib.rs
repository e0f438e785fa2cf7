//! # polarscope
//!
//! Compare sentiment models against ground truth and against each other.
//!
//! polarscope loads a CSV of labeled reviews, one `polarity` column plus one
//! `<model>_sentiment_code` column per model, and answers questions such as
//! "how well does model A agree with model B?":
//!
//! - **Data**: typed review tables, PCA/UMAP embedding points, review summaries
//! - **Analysis**: confusion matrices, accuracy, F1, sensitivity, specificity,
//!   Cohen's Kappa, per-model leaderboards and agreement flags
//!
//! ## Quick Start
//!
//! ```rust
//! use polarscope::prelude::*;
//!
//! let csv = "text,polarity,gemma2:2b_sentiment_code\n\
//!            loved it,2,2\n\
//!            hated it,1,1\n\
//!            \"fine, I guess\",2,1\n";
//! let table = parse_table(csv)?;
//!
//! let cmp = compare_columns(&table, "polarity", "gemma2:2b_sentiment_code")?;
//! assert_eq!(cmp.comparable_pairs, 3);
//! println!("{}", cmp.metrics.formatted());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use polarscope_analysis as analysis;
pub use polarscope_core as core;
pub use polarscope_data as data;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use polarscope::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use polarscope_core::{display_name, Label, LabelColumn, Sentiment, POLARITY_COLUMN};

    // Data
    pub use polarscope_data::{
        fetch_table, load_table, parse_table, read_table, DataError, EmbeddingKind,
        EmbeddingPoint, Row, RowTable, Value,
    };

    // Analysis
    pub use polarscope_analysis::{
        agreement_flags, build_confusion_matrix, compare_columns, compare_labels,
        compute_metrics, model_leaderboard, rank_models, summarize_agreement, Agreement,
        AnalysisError, ConfusionMatrix, FormattedMetrics, MetricKind, Metrics, ModelScore,
        PairComparison,
    };
}
