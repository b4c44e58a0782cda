//! Configuration structures for order extraction and output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ComandaError, Result};

/// Main configuration for comanda.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComandaConfig {
    /// Order extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Order extraction configuration.
///
/// The defaults reproduce the standard pipeline; turning a pass off only
/// skips that pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Strip punctuation and symbols from the detected client name.
    pub sanitize_client: bool,

    /// Add `taxa ... R$` fees when the total is computed from items.
    pub include_fees: bool,

    /// Use the last `R$` amount in the text when nothing else gives a total.
    pub last_amount_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sanitize_client: true,
            include_fees: true,
            last_amount_fallback: true,
        }
    }
}

/// Output format for rendered orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl ComandaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ComandaError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
