//! Boundary value types

use std::ops::Range;

/// Extent of one sentence in the source text
///
/// `start` and `end` are byte offsets on UTF-8 character boundaries, so a
/// boundary can always be used to slice the text it was produced from.
/// [`Boundary::char_range`] and [`Extraction::char_boundaries`] give the
/// same extent as character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
}

impl Boundary {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end > start, "boundary must not be empty");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The sentence text this boundary covers
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    /// The same extent measured in characters rather than bytes
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        let end = start + text[self.range()].chars().count();
        start..end
    }
}

impl From<Boundary> for (usize, usize) {
    fn from(boundary: Boundary) -> Self {
        (boundary.start, boundary.end)
    }
}

/// Result of extracting sentences from one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Sentence boundaries in text order
    pub boundaries: Vec<Boundary>,
    /// Offset up to which the text was partitioned into sentences
    pub last_position: usize,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boundary> {
        self.boundaries.iter()
    }

    /// Slice every sentence out of `text`
    ///
    /// The slices borrow `text` only, so they outlive the extraction.
    pub fn sentences<'s, 'a: 's>(&'s self, text: &'a str) -> impl Iterator<Item = &'a str> + 's {
        self.boundaries.iter().map(move |b| b.slice(text))
    }

    /// Boundaries as character-index ranges into `text`
    pub fn char_boundaries(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.boundaries.len());
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for boundary in &self.boundaries {
            char_pos += text[byte_pos..boundary.start].chars().count();
            let start = char_pos;
            char_pos += boundary.slice(text).chars().count();
            byte_pos = boundary.end;
            ranges.push(start..char_pos);
        }
        ranges
    }

    /// `last_position` counted in characters of `text`
    pub fn char_last_position(&self, text: &str) -> usize {
        text[..self.last_position].chars().count()
    }
}

impl IntoIterator for Extraction {
    type Item = Boundary;
    type IntoIter = std::vec::IntoIter<Boundary>;

    fn into_iter(self) -> Self::IntoIter {
        self.boundaries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Extraction {
    type Item = &'a Boundary;
    type IntoIter = std::slice::Iter<'a, Boundary>;

    fn into_iter(self) -> Self::IntoIter {
        self.boundaries.iter()
    }
}
