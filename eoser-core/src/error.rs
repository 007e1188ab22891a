//! Error types for symbol configuration and table construction
//!
//! Extraction itself is total over all inputs and never produces an error;
//! everything here is raised while loading a configuration document or
//! building a [`SymbolTable`](crate::symbols::SymbolTable).

use crate::symbols::SymbolRole;
use thiserror::Error;

/// Error type for eoser operations
#[derive(Debug, Error)]
pub enum EoserError {
    /// A role queried by the extractor has neither a default nor an override
    #[error("no symbol registered for role {0}")]
    MissingSymbol(SymbolRole),

    /// A built-in default table could not be loaded
    #[error("invalid built-in symbol table: {0}")]
    InvalidDefaults(String),

    /// The configuration document lacks the `symbol-conf` root table
    #[error("no \"symbol-conf\" block found in the configuration")]
    MissingRoot,

    /// A symbol value is not exactly one character
    #[error("value of {role} should be one character, specified: {value:?}")]
    InvalidSymbolValue {
        /// Role named by the offending entry
        role: SymbolRole,
        /// The value as written in the document
        value: String,
    },

    /// A symbol entry names a role that does not exist
    #[error("unknown symbol name: {0}")]
    UnknownSymbolRole(String),

    /// The document is not valid TOML or does not match the schema
    #[error("failed to parse symbol configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A symbol table could not be written out as a document
    #[error("failed to serialize symbol configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Reading the configuration failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for eoser operations
pub type Result<T> = std::result::Result<T, EoserError>;
