//! Error types for polarscope_data.

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or reading a review table.
#[derive(Error, Debug)]
pub enum DataError {
    /// Required columns are absent. Fatal to the load.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Column not present in the header.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Column exists but holds text, not labels.
    #[error("Column '{0}' is not a label column")]
    NotLabelColumn(String),

    /// Index out of bounds.
    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the collection.
        length: usize,
    },

    /// Download error.
    #[error("Download error: {0}")]
    Download(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
