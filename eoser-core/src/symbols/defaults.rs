//! Built-in symbol tables
//!
//! Defaults are kept as embedded configuration documents and parsed once
//! on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Symbol;
use crate::config::ConfigurationLoader;
use crate::error::{EoserError, Result};

/// A built-in language and the variants it ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Language tag used to select the table
    pub code: &'static str,
    /// Human readable name
    pub name: &'static str,
    /// Variant names; the first one is the default
    pub variants: &'static [&'static str],
}

/// Languages with a built-in table
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        code: "en",
        name: "English",
        variants: &[],
    },
    LanguageInfo {
        code: "ja",
        name: "Japanese",
        variants: &["zenkaku", "zenkaku2", "hankaku"],
    },
];

type EmbeddedTables = HashMap<&'static str, Vec<Symbol>>;

static EMBEDDED: OnceLock<std::result::Result<EmbeddedTables, String>> = OnceLock::new();

macro_rules! embed_symbol_table {
    ($key:expr, $path:expr) => {
        ($key, include_str!($path))
    };
}

fn load_embedded_tables() -> std::result::Result<EmbeddedTables, String> {
    let embedded = [
        embed_symbol_table!("en", "../../configs/symbols/english.toml"),
        embed_symbol_table!("ja", "../../configs/symbols/japanese.toml"),
        embed_symbol_table!("ja-zenkaku2", "../../configs/symbols/japanese-zenkaku2.toml"),
        embed_symbol_table!("ja-hankaku", "../../configs/symbols/japanese-hankaku.toml"),
    ];

    let mut tables = HashMap::new();
    for (key, content) in embedded {
        let config = ConfigurationLoader::load_str(content)
            .map_err(|e| format!("failed to parse built-in table {key}: {e}"))?;
        tables.insert(key, config.symbols);
    }
    Ok(tables)
}

/// The default table selected for a language and variant
#[derive(Debug, Clone, Copy)]
pub(crate) struct Defaults {
    pub language: &'static str,
    pub variant: Option<&'static str>,
    pub symbols: &'static [Symbol],
}

/// Map a language tag onto a built-in language, falling back to English
pub(crate) fn normalize_language(code: &str) -> &'static str {
    match code.to_lowercase().as_str() {
        "en" | "eng" | "english" => "en",
        "ja" | "jpn" | "japanese" => "ja",
        _ => {
            log::warn!("No built-in symbol table for language \"{code}\", using English defaults");
            "en"
        }
    }
}

/// Resolve the default symbols for a language and optional variant
pub(crate) fn resolve(language: &str, variant: Option<&str>) -> Result<Defaults> {
    let language = normalize_language(language);
    let info = LANGUAGES
        .iter()
        .find(|info| info.code == language)
        .ok_or_else(|| EoserError::InvalidDefaults(format!("unregistered language {language}")))?;

    let variant = match (info.variants.first(), variant) {
        (None, None) => None,
        (None, Some(requested)) => {
            log::warn!("Language \"{language}\" has no variants, ignoring \"{requested}\"");
            None
        }
        (Some(&base), None) => Some(base),
        (Some(&base), Some(requested)) => match info.variants.iter().find(|v| **v == requested) {
            Some(&found) => Some(found),
            None => {
                log::warn!("Unknown variant \"{requested}\" for \"{language}\", using \"{base}\"");
                Some(base)
            }
        },
    };

    let key = match variant {
        Some(v) if info.variants.first() != Some(&v) => format!("{language}-{v}"),
        _ => language.to_string(),
    };

    let tables = EMBEDDED
        .get_or_init(load_embedded_tables)
        .as_ref()
        .map_err(|e| EoserError::InvalidDefaults(e.clone()))?;

    let symbols = tables
        .get(key.as_str())
        .ok_or_else(|| EoserError::InvalidDefaults(format!("missing built-in table {key}")))?;

    Ok(Defaults {
        language,
        variant,
        symbols,
    })
}
