//! Comparison of two label columns.

use polarscope_core::Label;
use polarscope_data::RowTable;
use serde::{Deserialize, Serialize};

use crate::confusion::{build_confusion_matrix, ConfusionMatrix};
use crate::error::{AnalysisError, Result};
use crate::metrics::{compute_metrics, Metrics};

/// Result of comparing a row selector against a column selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    /// Row selector column.
    pub row_column: String,
    /// Column selector column.
    pub col_column: String,
    /// Counts.
    pub matrix: ConfusionMatrix,
    /// Pairs that entered the matrix. Always greater than zero.
    pub comparable_pairs: u64,
    /// Derived metrics.
    pub metrics: Metrics,
}

/// Compare two label sequences.
///
/// Fails with [`AnalysisError::NoComparablePairs`] when no index holds a
/// two-class label in both sequences, which is distinct from a matrix whose
/// counts all fall on one side.
pub fn compare_labels(
    row_column: &str,
    row_labels: &[Label],
    col_column: &str,
    col_labels: &[Label],
) -> Result<PairComparison> {
    let matrix = build_confusion_matrix(row_labels, col_labels);
    let comparable_pairs = matrix.total();
    if comparable_pairs == 0 {
        return Err(AnalysisError::NoComparablePairs {
            row: row_column.to_string(),
            col: col_column.to_string(),
        });
    }

    Ok(PairComparison {
        row_column: row_column.to_string(),
        col_column: col_column.to_string(),
        matrix,
        comparable_pairs,
        metrics: compute_metrics(&matrix),
    })
}

/// Compare two label columns of a table.
pub fn compare_columns(table: &RowTable, row_column: &str, col_column: &str) -> Result<PairComparison> {
    let row_labels = table.labels(row_column)?;
    let col_labels = table.labels(col_column)?;
    let comparison = compare_labels(row_column, &row_labels, col_column, &col_labels)?;

    tracing::debug!(
        "Compared '{}' x '{}': {} of {} rows comparable",
        row_column,
        col_column,
        comparison.comparable_pairs,
        table.len()
    );

    Ok(comparison)
}
