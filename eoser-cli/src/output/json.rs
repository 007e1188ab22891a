//! JSON output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use eoser_core::Sentence;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;

/// JSON formatter - outputs sentences as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceRecord>,
}

/// One sentence in the JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceRecord {
    /// Source file the sentence was read from
    pub file: String,
    /// 1-based line of the sentence's first visible character
    pub line: usize,
    /// Byte offset of the sentence in its source
    pub offset: usize,
    /// Character offset of the sentence in its source
    pub char_offset: usize,
    /// Sentence text with whitespace folded
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, source: &Path, sentence: &Sentence) -> Result<()> {
        self.sentences.push(SentenceRecord {
            file: source.display().to_string(),
            line: sentence.line_number,
            offset: sentence.start_offset,
            char_offset: sentence.char_offset,
            text: sentence.display_text(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
