//! Column naming rules for review tables.

use serde::{Deserialize, Serialize};

/// Name of the ground-truth label column.
pub const POLARITY_COLUMN: &str = "polarity";

/// Suffix shared by every model prediction column.
pub const SENTIMENT_SUFFIX: &str = "_sentiment_code";

/// Column holding the fine-tuned model's predictions. Listed right after
/// polarity when a review is summarised.
pub const FINE_TUNED_COLUMN: &str = "fine_tuned_sentiment_code";

/// Whether a column holds labels (ground truth or model prediction).
pub fn is_label_column(name: &str) -> bool {
    name == POLARITY_COLUMN || is_model_column(name)
}

/// Whether a column holds a model's predictions.
pub fn is_model_column(name: &str) -> bool {
    name.ends_with(SENTIMENT_SUFFIX)
}

/// Human-readable name of a label column.
///
/// `polarity` becomes `Polarity`. Model columns lose the sentiment suffix and
/// each `_`- or `:`-separated part is capitalised, so
/// `gemma2:2b_sentiment_code` becomes `Gemma2 2b`.
pub fn display_name(column: &str) -> String {
    if column == POLARITY_COLUMN {
        return "Polarity".to_string();
    }
    let stem = column.strip_suffix(SENTIMENT_SUFFIX).unwrap_or(column);
    stem.split(['_', ':'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A label column that can be picked as a comparison selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelColumn {
    /// Column name in the header.
    pub column: String,
    /// Human-readable name.
    pub display_name: String,
}

impl LabelColumn {
    /// Create a selector for a column, deriving its display name.
    pub fn new(column: impl Into<String>) -> Self {
        let column = column.into();
        let display_name = display_name(&column);
        Self {
            column,
            display_name,
        }
    }

    /// Whether this is the ground-truth column.
    pub fn is_polarity(&self) -> bool {
        self.column == POLARITY_COLUMN
    }
}
