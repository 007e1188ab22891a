//! Plain text output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use eoser_core::Sentence;

use super::OutputFormatter;

/// Text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, _source: &Path, sentence: &Sentence) -> Result<()> {
        writeln!(self.writer, "{}", sentence.display_text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
