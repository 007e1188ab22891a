//! Source text reading

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Input name standing for standard input
pub const STDIN_MARKER: &str = "-";

const BOM: char = '\u{feff}';

/// Reads source documents as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a source document; `-` reads standard input
    pub fn read_text(path: &Path) -> Result<String> {
        if Self::is_stdin(path) {
            return Self::read_from(io::stdin().lock()).context("Failed to read standard input");
        }

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::strip_bom(content))
    }

    /// Read a whole document from any reader
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::strip_bom(content))
    }

    pub fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == STDIN_MARKER
    }

    // offsets are reported against the text after the byte order mark
    fn strip_bom(content: String) -> String {
        match content.strip_prefix(BOM) {
            Some(rest) => rest.to_string(),
            None => content,
        }
    }
}
