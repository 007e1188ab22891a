//! Markdown output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use eoser_core::Sentence;

use super::OutputFormatter;

/// Markdown formatter - outputs sentences as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new Markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, _source: &Path, sentence: &Sentence) -> Result<()> {
        self.sentence_count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.sentence_count,
            sentence.display_text()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.sentence_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
