//! Serde schema of a symbol configuration document
//!
//! ```toml
//! [symbol-conf]
//! lang = "en"
//!
//! [[symbol-conf.symbol]]
//! name = "FULL_STOP"
//! value = "."
//! invalid-chars = "0123456789"
//! before-space = false
//! after-space = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SymbolConfDocument {
    #[serde(rename = "symbol-conf", default, skip_serializing_if = "Option::is_none")]
    pub root: Option<SymbolConfRoot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SymbolConfRoot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "symbol", default)]
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SymbolEntry {
    pub name: String,
    pub value: String,
    #[serde(rename = "invalid-chars", default, skip_serializing_if = "String::is_empty")]
    pub invalid_chars: String,
    #[serde(rename = "before-space", default)]
    pub before_space: bool,
    #[serde(rename = "after-space", default)]
    pub after_space: bool,
}
