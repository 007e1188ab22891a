//! Symbol table

use std::collections::BTreeMap;

use super::defaults;
use super::{Symbol, SymbolRole};
use crate::config::SymbolConfiguration;
use crate::error::{EoserError, Result};

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Registry of symbol roles for one language
///
/// The table is populated from the built-in defaults of its language (and
/// variant), then each override replaces the entry of its role. It is not
/// mutated afterwards, so a single table can back any number of
/// concurrent extractions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    language: String,
    variant: Option<String>,
    symbols: BTreeMap<SymbolRole, Symbol>,
}

impl SymbolTable {
    /// Build a table from language defaults and custom overrides
    ///
    /// Unknown languages use the English defaults; unknown variants use the
    /// language's base table. Later overrides of the same role win.
    pub fn new<I>(language: &str, variant: Option<&str>, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let defaults = defaults::resolve(language, variant)?;

        let mut symbols: BTreeMap<SymbolRole, Symbol> = defaults
            .symbols
            .iter()
            .map(|symbol| (symbol.role(), symbol.clone()))
            .collect();

        for symbol in overrides {
            log::debug!(
                "Overriding {} with {:?} for \"{}\"",
                symbol.role(),
                symbol.value(),
                defaults.language
            );
            symbols.insert(symbol.role(), symbol);
        }

        Ok(Self {
            language: defaults.language.to_string(),
            variant: defaults.variant.map(str::to_string),
            symbols,
        })
    }

    /// Default English table
    pub fn english() -> Result<Self> {
        Self::new("en", None, Vec::new())
    }

    /// Default Japanese table (full-width punctuation)
    pub fn japanese() -> Result<Self> {
        Self::new("ja", None, Vec::new())
    }

    /// Build a table from a loaded configuration document
    pub fn from_configuration(
        configuration: &SymbolConfiguration,
        variant: Option<&str>,
    ) -> Result<Self> {
        Self::new(
            &configuration.language,
            variant,
            configuration.symbols.iter().cloned(),
        )
    }

    /// Look up the symbol registered for a role
    pub fn get(&self, role: SymbolRole) -> Result<&Symbol> {
        self.symbols
            .get(&role)
            .ok_or(EoserError::MissingSymbol(role))
    }

    pub fn contains(&self, role: SymbolRole) -> bool {
        self.symbols.contains_key(&role)
    }

    /// Find the symbol whose value is `ch`
    ///
    /// When several roles share a character the one declared first in
    /// [`SymbolRole`] wins.
    pub fn symbol_for(&self, ch: char) -> Option<&Symbol> {
        self.symbols.values().find(|symbol| symbol.value() == ch)
    }

    /// All symbols in role order
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
