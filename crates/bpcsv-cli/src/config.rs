use crate::paths::expand_tilde;
use anyhow::{Context, Result};
use bpcsv_types::TypeIdentifiers;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output options from the `[output]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Start the CSV with a header row
    pub header: bool,
}

/// Main configuration for bpcsv
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub identifiers: TypeIdentifiers,
    pub output: OutputConfig,
}

impl Config {
    /// Load the config named on the command line (or `BPCSV_CONFIG`),
    /// falling back to defaults when none is given
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::load_from(&expand_tilde(path)),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}
