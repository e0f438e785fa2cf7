//! Precomputed embedding coordinates for 3D scatter plots.
//!
//! Each review carries two 3D projections, `<prefix>_pca_embedding_{1,2,3}`
//! and `<prefix>_umap_embedding_{1,2,3}`. The prefix names the model that
//! produced the embeddings (`mah` in the published dataset).

use std::fmt;
use std::str::FromStr;

use polarscope_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::table::RowTable;

/// Default embedding column prefix.
pub const DEFAULT_PREFIX: &str = "mah";

/// Which projection to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmbeddingKind {
    /// Principal component analysis.
    #[default]
    Pca,
    /// Uniform manifold approximation and projection.
    Umap,
}

impl EmbeddingKind {
    /// Both projections.
    pub const ALL: [EmbeddingKind; 2] = [EmbeddingKind::Pca, EmbeddingKind::Umap];

    fn tag(self) -> &'static str {
        match self {
            Self::Pca => "pca",
            Self::Umap => "umap",
        }
    }
}

impl fmt::Display for EmbeddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pca => f.write_str("PCA"),
            Self::Umap => f.write_str("UMAP"),
        }
    }
}

impl FromStr for EmbeddingKind {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pca" => Ok(Self::Pca),
            "umap" => Ok(Self::Umap),
            other => Err(CoreError::InvalidInput(format!(
                "unknown embedding '{}', expected pca or umap",
                other
            ))),
        }
    }
}

/// One plottable review.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    /// Index of the review in the table.
    pub row: usize,
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
    /// Third coordinate.
    pub z: f64,
}

/// Column names of one projection.
pub fn embedding_columns(prefix: &str, kind: EmbeddingKind) -> [String; 3] {
    [1, 2, 3].map(|axis| format!("{}_{}_embedding_{}", prefix, kind.tag(), axis))
}

/// Embedding columns of either projection that the table lacks.
pub fn missing_embedding_columns(table: &RowTable, prefix: &str) -> Vec<String> {
    EmbeddingKind::ALL
        .iter()
        .flat_map(|&kind| embedding_columns(prefix, kind))
        .filter(|column| !table.has_column(column))
        .collect()
}

/// Extract the points of one projection.
///
/// Rows whose three coordinates do not all parse as finite numbers are
/// skipped; the remaining points keep their row index.
pub fn embedding_points(
    table: &RowTable,
    prefix: &str,
    kind: EmbeddingKind,
) -> Result<Vec<EmbeddingPoint>> {
    let [x_col, y_col, z_col] = embedding_columns(prefix, kind);
    for column in [&x_col, &y_col, &z_col] {
        if !table.has_column(column) {
            return Err(DataError::UnknownColumn(column.clone()));
        }
    }

    let coord = |row: &crate::Row, column: &str| {
        row.text(column)
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };

    let points: Vec<EmbeddingPoint> = table
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            Some(EmbeddingPoint {
                row: i,
                x: coord(row, &x_col)?,
                y: coord(row, &y_col)?,
                z: coord(row, &z_col)?,
            })
        })
        .collect();

    if points.len() < table.len() {
        tracing::debug!(
            "{} of {} rows have no usable {} coordinates",
            table.len() - points.len(),
            table.len(),
            kind
        );
    }

    Ok(points)
}
