//! CLI settings file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// Settings read from a `--config` file; command-line flags win over these
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Built-in language code
    pub language: String,

    /// Variant of the built-in table
    pub variant: Option<String>,

    /// Symbol configuration file, relative to the settings file
    pub symbol_config: Option<PathBuf>,

    /// Extract files in parallel
    pub parallel: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: eoser_core::symbols::DEFAULT_LANGUAGE.to_string(),
            variant: None,
            symbol_config: None,
            parallel: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("invalid settings in {}: {e}", path.display()))
        })?;

        if let (Some(symbols), Some(dir)) = (&config.processing.symbol_config, path.parent()) {
            if symbols.is_relative() {
                config.processing.symbol_config = Some(dir.join(symbols));
            }
        }

        log::debug!("Loaded settings from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
