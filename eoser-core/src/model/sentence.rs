//! Sentence records built from an extraction

use serde::Serialize;

use crate::extractor::Extraction;

/// A sentence cut out of a source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Sentence text, exactly as it appears in the source
    pub content: String,
    /// 1-based line of the first non-whitespace character
    pub line_number: usize,
    /// Byte offset of the sentence in the source
    pub start_offset: usize,
    /// Character offset of the sentence in the source
    pub char_offset: usize,
}

impl Sentence {
    pub fn new(
        content: impl Into<String>,
        line_number: usize,
        start_offset: usize,
        char_offset: usize,
    ) -> Self {
        Self {
            content: content.into(),
            line_number,
            start_offset,
            char_offset,
        }
    }

    /// Build sentences for every boundary of `extraction` over `text`
    pub fn from_extraction(text: &str, extraction: &Extraction) -> Vec<Sentence> {
        let mut sentences = Vec::with_capacity(extraction.len());
        let mut line = 1;
        let mut scanned = 0;

        for (boundary, chars) in extraction.iter().zip(extraction.char_boundaries(text)) {
            let content = boundary.slice(text);
            let leading = content.len() - content.trim_start().len();
            let first_visible = boundary.start + leading;

            line += text[scanned..first_visible].matches('\n').count();
            scanned = first_visible;

            sentences.push(Sentence::new(content, line, boundary.start, chars.start));
        }

        sentences
    }

    /// Content with surrounding whitespace removed and inner line breaks
    /// folded into single spaces
    pub fn display_text(&self) -> String {
        self.content.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
