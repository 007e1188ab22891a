//! Symbol configuration loader

use std::fs;
use std::io::Read;
use std::path::Path;

use super::types::{SymbolConfDocument, SymbolConfRoot, SymbolEntry};
use crate::error::{EoserError, Result};
use crate::symbols::{Symbol, SymbolRole, SymbolTable, DEFAULT_LANGUAGE};

/// Symbols declared by a configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolConfiguration {
    /// Language declared on the root block
    pub language: String,
    /// Symbol overrides, in document order
    pub symbols: Vec<Symbol>,
}

impl SymbolConfiguration {
    /// Capture every symbol of a table as a configuration
    pub fn from_table(table: &SymbolTable) -> Self {
        Self {
            language: table.language().to_string(),
            symbols: table.symbols().cloned().collect(),
        }
    }

    /// Serialize into the document format read by [`ConfigurationLoader`]
    pub fn to_toml_string(&self) -> Result<String> {
        let document = SymbolConfDocument {
            root: Some(SymbolConfRoot {
                lang: Some(self.language.clone()),
                symbols: self.symbols.iter().map(to_entry).collect(),
            }),
        };
        Ok(toml::to_string_pretty(&document)?)
    }
}

/// Loads symbol overrides from configuration documents
pub struct ConfigurationLoader;

impl ConfigurationLoader {
    /// Load a configuration file
    pub fn load_file(path: &Path) -> Result<SymbolConfiguration> {
        log::info!(
            "Loading symbol configuration from \"{}\"",
            path.display()
        );
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load a configuration from any reader; the reader is consumed
    pub fn load_reader<R: Read>(mut reader: R) -> Result<SymbolConfiguration> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::load_str(&content)
    }

    /// Load a configuration held in memory
    pub fn load_str(content: &str) -> Result<SymbolConfiguration> {
        let document: SymbolConfDocument = toml::from_str(content)?;
        let root = document.root.ok_or(EoserError::MissingRoot)?;

        let language = match root.lang {
            Some(lang) => {
                log::info!("Language is set to \"{lang}\"");
                lang
            }
            None => {
                log::warn!("No language configuration, falling back to \"{DEFAULT_LANGUAGE}\"");
                DEFAULT_LANGUAGE.to_string()
            }
        };

        if root.symbols.is_empty() {
            log::warn!("No \"symbol\" entries found in the configuration");
        }

        let symbols = root
            .symbols
            .iter()
            .map(to_symbol)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Loaded {} symbol override(s)", symbols.len());
        Ok(SymbolConfiguration { language, symbols })
    }
}

fn to_symbol(entry: &SymbolEntry) -> Result<Symbol> {
    let role: SymbolRole = entry.name.parse()?;

    let mut chars = entry.value.chars();
    let value = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => {
            return Err(EoserError::InvalidSymbolValue {
                role,
                value: entry.value.clone(),
            })
        }
    };

    Ok(Symbol::new(
        role,
        value,
        &entry.invalid_chars,
        entry.before_space,
        entry.after_space,
    ))
}

fn to_entry(symbol: &Symbol) -> SymbolEntry {
    SymbolEntry {
        name: symbol.role().name().to_string(),
        value: symbol.value().to_string(),
        invalid_chars: symbol.invalid_chars().iter().collect(),
        before_space: symbol.needs_before_space(),
        after_space: symbol.needs_after_space(),
    }
}
