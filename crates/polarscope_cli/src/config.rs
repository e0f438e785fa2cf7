//! CLI configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use polarscope::analysis::MetricKind;
use polarscope::data::{embedding::DEFAULT_PREFIX, DEFAULT_SOURCE, TEXT_COLUMN};
use serde::{Deserialize, Serialize};

/// Settings read from `--config`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarscopeConfig {
    /// Path or URL of the review table.
    pub data_source: String,
    /// Prefix of the embedding coordinate columns.
    pub embedding_prefix: String,
    /// Column holding the review text.
    pub text_column: String,
    /// Metric used to rank the leaderboard.
    pub default_metric: MetricKind,
}

impl Default for PolarscopeConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_SOURCE.to_string(),
            embedding_prefix: DEFAULT_PREFIX.to_string(),
            text_column: TEXT_COLUMN.to_string(),
            default_metric: MetricKind::Accuracy,
        }
    }
}

impl PolarscopeConfig {
    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Load the config file if one was given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
