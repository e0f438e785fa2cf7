//! Per-review label summaries.

use polarscope_core::{display_name, is_model_column, Label, FINE_TUNED_COLUMN, POLARITY_COLUMN};
use serde::{Deserialize, Serialize};

use crate::table::Row;

/// One model's verdict on a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLabel {
    /// Column name.
    pub column: String,
    /// Human-readable model name.
    pub model: String,
    /// The label stored for this review.
    pub label: Label,
}

/// Labels of one review in display order.
///
/// Ground truth comes first, then the fine-tuned model, then every other
/// model column sorted by name. Columns the row lacks are skipped.
pub fn review_labels(row: &Row) -> Vec<ReviewLabel> {
    let mut others: Vec<&str> = row
        .iter()
        .map(|(column, _)| column)
        .filter(|c| is_model_column(c) && *c != FINE_TUNED_COLUMN)
        .collect();
    others.sort_unstable();

    [POLARITY_COLUMN, FINE_TUNED_COLUMN]
        .into_iter()
        .chain(others)
        .filter_map(|column| {
            row.label(column).map(|label| ReviewLabel {
                column: column.to_string(),
                model: display_name(column),
                label,
            })
        })
        .collect()
}

/// Text of a review, if the column exists.
pub fn review_text<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.text(column)
}
