//! # polarscope_analysis
//!
//! Classification analysis for polarscope: confusion matrices, derived
//! metrics, Cohen's Kappa and model agreement.
//!
//! This crate provides tools for comparing any two label columns:
//! - Two-class confusion matrix construction
//! - Accuracy, precision, recall, F1, sensitivity, specificity and Kappa
//! - Pairwise column comparison and a per-model leaderboard against polarity
//! - Per-review agreement between two models
//!
//! All functions are pure; a loaded [`RowTable`](polarscope_data::RowTable)
//! can be analysed from any number of threads at once.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod agreement;
mod comparison;
mod confusion;
mod error;
mod leaderboard;
mod metrics;

pub use agreement::{agreement, agreement_flags, summarize_agreement, Agreement, AgreementSummary};
pub use comparison::{compare_columns, compare_labels, PairComparison};
pub use confusion::{build_confusion_matrix, ConfusionMatrix};
pub use error::{AnalysisError, Result};
pub use leaderboard::{model_leaderboard, rank_models, ModelScore};
pub use metrics::{compute_metrics, format_metric, FormattedMetrics, MetricKind, Metrics};
