//! Derived classification metrics.
//!
//! Every metric is a plain ratio of confusion matrix counts. A zero
//! denominator is not an error: the metric becomes `NaN` and renders as
//! `N/A`, while the remaining metrics are still reported.

use std::fmt;
use std::str::FromStr;

use polarscope_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::confusion::ConfusionMatrix;

/// Metrics derived from one confusion matrix. Undefined values are `NaN`,
/// serialized as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// (TP + TN) / N
    #[serde(with = "undefined_as_null")]
    pub accuracy: f64,
    /// TP / (TP + FP)
    #[serde(with = "undefined_as_null")]
    pub precision: f64,
    /// TP / (TP + FN)
    #[serde(with = "undefined_as_null")]
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    #[serde(with = "undefined_as_null")]
    pub f1: f64,
    /// Same as recall.
    #[serde(with = "undefined_as_null")]
    pub sensitivity: f64,
    /// TN / (TN + FP)
    #[serde(with = "undefined_as_null")]
    pub specificity: f64,
    /// Cohen's Kappa.
    #[serde(with = "undefined_as_null")]
    pub kappa: f64,
}

impl Metrics {
    /// Value of one metric.
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Accuracy => self.accuracy,
            MetricKind::F1 => self.f1,
            MetricKind::Sensitivity => self.sensitivity,
            MetricKind::Specificity => self.specificity,
            MetricKind::Kappa => self.kappa,
        }
    }

    /// Render the reported metrics at three decimals.
    pub fn formatted(&self) -> FormattedMetrics {
        FormattedMetrics {
            accuracy: format_metric(self.accuracy),
            f1: format_metric(self.f1),
            sensitivity: format_metric(self.sensitivity),
            specificity: format_metric(self.specificity),
            kappa: format_metric(self.kappa),
        }
    }
}

mod undefined_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let value = value.is_finite().then_some(*value);
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Compute metrics from a confusion matrix.
///
/// ```text
/// accuracy    = (TP + TN) / N
/// precision   = TP / (TP + FP)
/// recall      = TP / (TP + FN)
/// f1          = 2 * precision * recall / (precision + recall)
/// specificity = TN / (TN + FP)
/// pE          = (TP+FP)/N * (TP+FN)/N + (TN+FN)/N * (TN+FP)/N
/// kappa       = (accuracy - pE) / (1 - pE)
/// ```
pub fn compute_metrics(matrix: &ConfusionMatrix) -> Metrics {
    let tp = matrix.true_pos as f64;
    let tn = matrix.true_neg as f64;
    let fp = matrix.false_pos as f64;
    let fn_ = matrix.false_neg as f64;
    let total = tp + tn + fp + fn_;

    let accuracy = ratio(tp + tn, total);
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = ratio(2.0 * precision * recall, precision + recall);
    let specificity = ratio(tn, tn + fp);

    let p_observed = accuracy;
    let pos1 = ratio(tp + fp, total);
    let pos2 = ratio(tp + fn_, total);
    let neg1 = ratio(tn + fn_, total);
    let neg2 = ratio(tn + fp, total);
    let p_expected = pos1 * pos2 + neg1 * neg2;
    let kappa = ratio(p_observed - p_expected, 1.0 - p_expected);

    Metrics {
        accuracy,
        precision,
        recall,
        f1,
        sensitivity: recall,
        specificity,
        kappa,
    }
}

/// Division that yields `NaN` instead of infinity on a zero denominator.
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}

/// Format a metric at three decimals, rounding half away from zero.
///
/// Returns `None` for non-finite values.
pub fn format_metric(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    // -0.0 would print as "-0.000"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    Some(format!("{:.3}", rounded))
}

/// The five reported metrics as fixed-point strings. `None` means undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMetrics {
    /// Accuracy.
    pub accuracy: Option<String>,
    /// F1 score.
    pub f1: Option<String>,
    /// Sensitivity.
    pub sensitivity: Option<String>,
    /// Specificity.
    pub specificity: Option<String>,
    /// Cohen's Kappa.
    pub kappa: Option<String>,
}

impl FormattedMetrics {
    /// Formatted value of one metric, `N/A` when undefined.
    pub fn display(&self, kind: MetricKind) -> &str {
        let value = match kind {
            MetricKind::Accuracy => &self.accuracy,
            MetricKind::F1 => &self.f1,
            MetricKind::Sensitivity => &self.sensitivity,
            MetricKind::Specificity => &self.specificity,
            MetricKind::Kappa => &self.kappa,
        };
        value.as_deref().unwrap_or("N/A")
    }
}

impl fmt::Display for FormattedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in MetricKind::ALL {
            writeln!(f, "{:<14} {:>7}", kind.label(), self.display(kind))?;
        }
        Ok(())
    }
}

/// One of the reported metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Accuracy.
    #[default]
    Accuracy,
    /// F1 score.
    F1,
    /// Sensitivity (recall).
    Sensitivity,
    /// Specificity.
    Specificity,
    /// Cohen's Kappa.
    Kappa,
}

impl MetricKind {
    /// All reported metrics in display order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Accuracy,
        MetricKind::F1,
        MetricKind::Sensitivity,
        MetricKind::Specificity,
        MetricKind::Kappa,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::F1 => "F1 Score",
            Self::Sensitivity => "Sensitivity",
            Self::Specificity => "Specificity",
            Self::Kappa => "Cohen's Kappa",
        }
    }

    /// Identifier used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::F1 => "f1",
            Self::Sensitivity => "sensitivity",
            Self::Specificity => "specificity",
            Self::Kappa => "kappa",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetricKind {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "unknown metric '{}', expected one of accuracy, f1, sensitivity, specificity, kappa",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn cm(true_pos: u64, true_neg: u64, false_pos: u64, false_neg: u64) -> ConfusionMatrix {
        ConfusionMatrix {
            true_pos,
            true_neg,
            false_pos,
            false_neg,
        }
    }

    #[test]
    fn test_balanced_matrix() {
        let m = compute_metrics(&cm(1, 1, 1, 1));
        let f = m.formatted();

        assert_eq!(f.accuracy.as_deref(), Some("0.500"));
        assert_eq!(f.sensitivity.as_deref(), Some("0.500"));
        assert_eq!(f.specificity.as_deref(), Some("0.500"));
        assert_eq!(f.f1.as_deref(), Some("0.500"));
        assert_eq!(f.kappa.as_deref(), Some("0.000"));
    }

    #[test]
    fn test_perfect_agreement() {
        let m = compute_metrics(&cm(2, 2, 0, 0));
        assert!((m.accuracy - 1.0).abs() < 1e-12);
        assert!((m.kappa - 1.0).abs() < 1e-12);
        assert_eq!(m.formatted().kappa.as_deref(), Some("1.000"));
    }

    #[test]
    fn test_known_values() {
        // TP=40 TN=30 FP=10 FN=20, N=100
        let m = compute_metrics(&cm(40, 30, 10, 20));
        assert!((m.accuracy - 0.7).abs() < 1e-12);
        assert!((m.precision - 0.8).abs() < 1e-12);
        assert!((m.recall - 40.0 / 60.0).abs() < 1e-12);
        assert!((m.specificity - 0.75).abs() < 1e-12);
        // pE = 0.5*0.6 + 0.5*0.4 = 0.5
        assert!((m.kappa - 0.4).abs() < 1e-12);
        assert_eq!(m.formatted().f1.as_deref(), Some("0.727"));
    }

    #[test]
    fn test_empty_matrix_is_undefined() {
        let m = compute_metrics(&ConfusionMatrix::default());
        assert!(m.accuracy.is_nan());
        assert!(m.f1.is_nan());
        assert!(m.kappa.is_nan());
        assert_eq!(m.formatted().accuracy, None);
        assert_eq!(m.formatted().display(MetricKind::Accuracy), "N/A");
    }

    #[test]
    fn test_partial_undefined() {
        // No positives predicted or present: precision, recall and F1 are undefined.
        let m = compute_metrics(&cm(0, 5, 0, 0));
        assert!(m.precision.is_nan());
        assert!(m.recall.is_nan());
        assert!(m.f1.is_nan());
        assert_eq!(m.formatted().accuracy.as_deref(), Some("1.000"));
        assert_eq!(m.formatted().specificity.as_deref(), Some("1.000"));
        // pE == 1, so kappa is 0/0.
        assert!(m.kappa.is_nan());
    }

    #[test]
    fn test_zero_precision_and_recall() {
        let m = compute_metrics(&cm(0, 0, 3, 4));
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.recall, 0.0);
        assert!(m.f1.is_nan());
    }

    #[test]
    fn test_format_metric_rounding() {
        assert_eq!(format_metric(0.5).as_deref(), Some("0.500"));
        assert_eq!(format_metric(2.0 / 3.0).as_deref(), Some("0.667"));
        assert_eq!(format_metric(0.12345).as_deref(), Some("0.123"));
        assert_eq!(format_metric(0.1255).as_deref(), Some("0.126"));
        assert_eq!(format_metric(-0.0625).as_deref(), Some("-0.063"));
        assert_eq!(format_metric(-0.0001).as_deref(), Some("0.000"));
        assert_eq!(format_metric(f64::NAN), None);
        assert_eq!(format_metric(f64::INFINITY), None);
    }

    #[test]
    fn test_formatting_idempotent() {
        let matrix = cm(17, 9, 4, 6);
        let first = compute_metrics(&matrix).formatted();
        let second = compute_metrics(&matrix).formatted();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_bounds_on_random_matrices() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let matrix = cm(
                rng.gen_range(0..50),
                rng.gen_range(0..50),
                rng.gen_range(0..50),
                rng.gen_range(0..50),
            );
            if matrix.is_empty() {
                continue;
            }
            let m = compute_metrics(&matrix);
            assert!((0.0..=1.0).contains(&m.accuracy));
            if m.kappa.is_finite() {
                assert!(m.kappa >= -1.0 - 1e-12 && m.kappa <= 1.0 + 1e-12, "kappa {}", m.kappa);
            }
        }
    }

    #[test]
    fn test_undefined_metrics_survive_json() {
        // Only positives on both sides: specificity and kappa are undefined.
        let m = compute_metrics(&cm(5, 0, 0, 0));
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"specificity\":null"));

        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.accuracy, 1.0);
        assert_eq!(back.f1, 1.0);
        assert!(back.specificity.is_nan());
        assert!(back.kappa.is_nan());
    }

    #[test]
    fn test_metric_kind_from_str() {
        assert_eq!("kappa".parse::<MetricKind>().unwrap(), MetricKind::Kappa);
        assert_eq!("F1".parse::<MetricKind>().unwrap(), MetricKind::F1);
        assert!("precision".parse::<MetricKind>().is_err());
        assert_eq!(MetricKind::Kappa.label(), "Cohen's Kappa");
    }

    #[test]
    fn test_display_lists_all_metrics() {
        let text = compute_metrics(&ConfusionMatrix::default()).formatted().to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l.ends_with("N/A")));
    }
}
