//! Error types for polarscope_analysis.

use polarscope_data::DataError;
use thiserror::Error;

/// Result type alias using [`AnalysisError`].
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while comparing label columns.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No row holds an in-domain label in both selected columns.
    #[error("No comparable sentiment pairs between '{row}' and '{col}'")]
    NoComparablePairs {
        /// Row selector.
        row: String,
        /// Column selector.
        col: String,
    },

    /// Data error.
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}
