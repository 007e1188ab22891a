//! Where the symbol table of a run comes from

use std::path::PathBuf;

use anyhow::{Context, Result};
use eoser_core::{ConfigurationLoader, SymbolTable};

/// Source of the symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSource {
    /// Built-in table for a language
    BuiltIn {
        language: String,
        variant: Option<String>,
    },
    /// Built-in table with overrides from a configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Replaces the language declared in the file
        language: Option<String>,
        variant: Option<String>,
    },
}

impl SymbolSource {
    /// Get the display name for the symbol source
    pub fn display_name(&self) -> String {
        let variant_suffix = |variant: &Option<String>| {
            variant
                .as_ref()
                .map(|v| format!(", variant: {v}"))
                .unwrap_or_default()
        };

        match self {
            SymbolSource::BuiltIn { language, variant } => {
                format!("Built-in: {language}{}", variant_suffix(variant))
            }
            SymbolSource::External {
                path,
                language,
                variant,
            } => match language {
                Some(code) => format!(
                    "External: {} (language: {code}{})",
                    path.display(),
                    variant_suffix(variant)
                ),
                None => format!("External: {}{}", path.display(), variant_suffix(variant)),
            },
        }
    }

    /// Build the symbol table this source describes
    pub fn build_table(&self) -> Result<SymbolTable> {
        match self {
            SymbolSource::BuiltIn { language, variant } => {
                SymbolTable::new(language, variant.as_deref(), Vec::new())
                    .with_context(|| format!("Failed to build symbol table for {language}"))
            }
            SymbolSource::External {
                path,
                language,
                variant,
            } => {
                let mut config = ConfigurationLoader::load_file(path).with_context(|| {
                    format!("Failed to load symbol configuration: {}", path.display())
                })?;
                if let Some(code) = language {
                    config.language = code.clone();
                }
                SymbolTable::from_configuration(&config, variant.as_deref()).with_context(|| {
                    format!("Invalid symbol configuration: {}", path.display())
                })
            }
        }
    }
}
