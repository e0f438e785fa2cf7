//! Per-model scores against the ground truth.

use std::cmp::Ordering;

use polarscope_core::POLARITY_COLUMN;
use polarscope_data::RowTable;
use serde::{Deserialize, Serialize};

use crate::confusion::build_confusion_matrix;
use crate::error::Result;
use crate::metrics::{compute_metrics, MetricKind, Metrics};

/// One model's performance against polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    /// Model column.
    pub column: String,
    /// Human-readable model name.
    pub model: String,
    /// Pairs that entered the matrix. Zero means every metric is undefined.
    pub comparable_pairs: u64,
    /// Derived metrics.
    pub metrics: Metrics,
}

/// Score every model column against `polarity`, in header order.
///
/// The model is the row selector and polarity the column selector. A model
/// without comparable pairs stays in the list with undefined metrics.
pub fn model_leaderboard(table: &RowTable) -> Result<Vec<ModelScore>> {
    let truth = table.labels(POLARITY_COLUMN)?;

    table
        .model_columns()
        .map(|column| -> Result<ModelScore> {
            let predictions = table.labels(&column.column)?;
            let matrix = build_confusion_matrix(&predictions, &truth);
            if matrix.is_empty() {
                tracing::warn!("Model '{}' has no comparable pairs", column.column);
            }
            Ok(ModelScore {
                column: column.column.clone(),
                model: column.display_name.clone(),
                comparable_pairs: matrix.total(),
                metrics: compute_metrics(&matrix),
            })
        })
        .collect()
}

/// Sort scores by one metric, best first.
///
/// Undefined values sort last; equal values keep their original order.
pub fn rank_models(scores: &mut [ModelScore], kind: MetricKind) {
    scores.sort_by(|a, b| {
        let (a, b) = (a.metrics.get(kind), b.metrics.get(kind));
        match (a.is_finite(), b.is_finite()) {
            (true, true) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    });
}
