//! Per-review agreement between two label columns.

use polarscope_core::Label;
use polarscope_data::RowTable;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether two labels of the same review agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Agreement {
    /// Same sentiment.
    Agree,
    /// Opposite sentiments.
    Disagree,
    /// At least one label is missing or outside the two-class domain.
    Incomparable,
}

/// Agreement of one pair of labels.
pub fn agreement(a: Label, b: Label) -> Agreement {
    match (a.sentiment(), b.sentiment()) {
        (Some(a), Some(b)) if a == b => Agreement::Agree,
        (Some(_), Some(_)) => Agreement::Disagree,
        _ => Agreement::Incomparable,
    }
}

/// Agreement of two columns, one entry per row.
pub fn agreement_flags(table: &RowTable, column_a: &str, column_b: &str) -> Result<Vec<Agreement>> {
    let a = table.labels(column_a)?;
    let b = table.labels(column_b)?;
    Ok(a.into_iter().zip(b).map(|(a, b)| agreement(a, b)).collect())
}

/// Counts of a run of agreement flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgreementSummary {
    /// Rows where both labels agree.
    pub agree: usize,
    /// Rows where the labels disagree.
    pub disagree: usize,
    /// Rows that could not be compared.
    pub incomparable: usize,
    /// `agree / (agree + disagree)`, `NaN` when nothing was comparable.
    pub rate: f64,
}

/// Summarise agreement flags.
pub fn summarize_agreement(flags: &[Agreement]) -> AgreementSummary {
    let mut summary = AgreementSummary::default();
    for flag in flags {
        match flag {
            Agreement::Agree => summary.agree += 1,
            Agreement::Disagree => summary.disagree += 1,
            Agreement::Incomparable => summary.incomparable += 1,
        }
    }
    let compared = summary.agree + summary.disagree;
    summary.rate = if compared == 0 {
        f64::NAN
    } else {
        summary.agree as f64 / compared as f64
    };
    summary
}
