//! Two-class confusion matrix.

use polarscope_core::{Label, Sentiment};
use serde::{Deserialize, Serialize};

/// Agreement counts between a row selector and a column selector.
///
/// Positive is code `2`, negative is code `1`. A "false positive" is a row
/// label of negative paired with a column label of positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Row positive, column positive.
    pub true_pos: u64,
    /// Row negative, column negative.
    pub true_neg: u64,
    /// Row negative, column positive.
    pub false_pos: u64,
    /// Row positive, column negative.
    pub false_neg: u64,
}

impl ConfusionMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pair.
    ///
    /// Pairs where either label is missing or outside the two-value domain
    /// are not counted.
    fn add(&mut self, row: Label, col: Label) {
        let (Some(row), Some(col)) = (row.sentiment(), col.sentiment()) else {
            return;
        };
        let cell = match (row, col) {
            (Sentiment::Positive, Sentiment::Positive) => &mut self.true_pos,
            (Sentiment::Negative, Sentiment::Negative) => &mut self.true_neg,
            (Sentiment::Negative, Sentiment::Positive) => &mut self.false_pos,
            (Sentiment::Positive, Sentiment::Negative) => &mut self.false_neg,
        };
        *cell += 1;
    }

    /// Number of counted pairs.
    pub fn total(&self) -> u64 {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    /// Whether no pair was counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The matrix obtained by swapping row and column selectors.
    pub fn transpose(&self) -> Self {
        Self {
            true_pos: self.true_pos,
            true_neg: self.true_neg,
            false_pos: self.false_neg,
            false_neg: self.false_pos,
        }
    }

    /// Get a text representation, rows first.
    pub fn to_string_table(&self) -> String {
        let width = self
            .true_pos
            .max(self.true_neg)
            .max(self.false_pos)
            .max(self.false_neg)
            .to_string()
            .len()
            .max(8);

        let mut s = String::new();
        s.push_str(&format!("{:>10} {:>w$} {:>w$}\n", "", "col pos", "col neg", w = width));
        s.push_str(&format!(
            "{:>10} {:>w$} {:>w$}\n",
            "row pos",
            self.true_pos,
            self.false_neg,
            w = width
        ));
        s.push_str(&format!(
            "{:>10} {:>w$} {:>w$}\n",
            "row neg",
            self.false_pos,
            self.true_neg,
            w = width
        ));
        s
    }
}

/// Build a confusion matrix from two label sequences.
///
/// Index `i` of each slice refers to the same review. Pairs are skipped when
/// either label is missing or not a two-class code. An all-zero matrix is a
/// valid result. If the slices differ in length the extra tail is ignored.
///
/// # Arguments
///
/// * `row_labels` - Labels of the row selector
/// * `col_labels` - Labels of the column selector
pub fn build_confusion_matrix(row_labels: &[Label], col_labels: &[Label]) -> ConfusionMatrix {
    let mut cm = ConfusionMatrix::new();
    for (&row, &col) in row_labels.iter().zip(col_labels) {
        cm.add(row, col);
    }
    cm
}
