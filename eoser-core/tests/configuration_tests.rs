//! Integration tests for symbol configuration loading

use eoser_core::{
    ConfigurationLoader, EoserError, SentenceExtractor, SymbolConfiguration, SymbolRole,
    SymbolTable,
};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const CUSTOM_CONFIG: &str = r#"
[symbol-conf]
lang = "en"

[[symbol-conf.symbol]]
name = "FULL_STOP"
value = "!"
after-space = true

[[symbol-conf.symbol]]
name = "LEFT_DOUBLE_QUOTATION_MARK"
value = "«"

[[symbol-conf.symbol]]
name = "RIGHT_DOUBLE_QUOTATION_MARK"
value = "»"
"#;

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("symbols.toml");
    fs::write(&path, CUSTOM_CONFIG).unwrap();

    let config = ConfigurationLoader::load_file(&path).unwrap();
    assert_eq!(config.language, "en");
    assert_eq!(config.symbols.len(), 3);
    assert_eq!(config.symbols[0].role(), SymbolRole::FullStop);
}

#[test]
fn test_load_from_reader() {
    let config = ConfigurationLoader::load_reader(Cursor::new(CUSTOM_CONFIG.as_bytes())).unwrap();
    assert_eq!(config.symbols.len(), 3);
}

#[test]
fn test_missing_file() {
    let result = ConfigurationLoader::load_file(std::path::Path::new("/nonexistent/symbols.toml"));
    assert!(matches!(result, Err(EoserError::Io(_))));
}

#[test]
fn test_malformed_document() {
    let result = ConfigurationLoader::load_str("[symbol-conf\nlang = ");
    assert!(matches!(result, Err(EoserError::Parse(_))));
}

#[test]
fn test_unknown_role() {
    let result = ConfigurationLoader::load_str(
        "[symbol-conf]\n[[symbol-conf.symbol]]\nname = \"FULL_STOPS\"\nvalue = \".\"\n",
    );
    match result {
        Err(EoserError::UnknownSymbolRole(name)) => assert_eq!(name, "FULL_STOPS"),
        other => panic!("Expected UnknownSymbolRole, got {other:?}"),
    }
}

#[test]
fn test_configuration_drives_extraction() {
    let config = ConfigurationLoader::load_str(CUSTOM_CONFIG).unwrap();
    let table = SymbolTable::from_configuration(&config, None).unwrap();
    let extractor = SentenceExtractor::new(table).unwrap();

    let text = "She said «no! never!» twice! Then. Gone!";
    let sentences: Vec<&str> = extractor.extract(text).sentences(text).collect();
    assert_eq!(
        sentences,
        vec!["She said «no! never!» twice!", " Then. Gone!"]
    );
}

#[test]
fn test_japanese_configuration_with_variant() {
    let config = ConfigurationLoader::load_str(
        "[symbol-conf]\nlang = \"ja\"\n\n[[symbol-conf.symbol]]\nname = \"COMMA\"\nvalue = \"､\"\n",
    )
    .unwrap();
    let table = SymbolTable::from_configuration(&config, Some("zenkaku2")).unwrap();

    assert_eq!(table.language(), "ja");
    assert_eq!(table.variant(), Some("zenkaku2"));
    assert_eq!(table.get(SymbolRole::FullStop).unwrap().value(), '．');
    assert_eq!(table.get(SymbolRole::Comma).unwrap().value(), '､');
}

#[test]
fn test_generated_document_round_trips() {
    let table = SymbolTable::new("ja", Some("hankaku"), Vec::new()).unwrap();
    let document = SymbolConfiguration::from_table(&table).to_toml_string().unwrap();

    let config = ConfigurationLoader::load_str(&document).unwrap();
    let rebuilt = SymbolTable::from_configuration(&config, Some("hankaku")).unwrap();
    assert_eq!(rebuilt, table);
}
