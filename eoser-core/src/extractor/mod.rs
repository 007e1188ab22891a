//! Sentence extraction
//!
//! [`SentenceExtractor`] walks a text once, left to right, and cuts it into
//! sentences using the terminal and paired symbols of a [`SymbolTable`]:
//!
//! - full stop, question mark and exclamation mark end a sentence when
//!   their spacing rules and invalid-neighbour sets allow it,
//! - a run of terminals (`"..."`, `"?!"`) ends a single sentence,
//! - closing quotes and parentheses directly after a terminal belong to the
//!   sentence it ends,
//! - terminals inside an open quotation or parenthesis never end a
//!   sentence; unmatched closers are ignored and an unmatched opener stays
//!   open until the end of the text,
//! - whatever non-blank text follows the last terminal is one more
//!   sentence.
//!
//! Whitespace between two sentences is not dropped: it stays at the front
//! of the following sentence, so the boundaries of a text tile it without
//! gaps.

pub mod boundary;

use std::collections::HashMap;
use std::sync::Arc;

pub use boundary::{Boundary, Extraction};

use crate::error::Result;
use crate::symbols::{PairKind, Symbol, SymbolRole, SymbolTable};

/// How a character takes part in quotation/parenthesis tracking
#[derive(Debug, Clone, Copy)]
struct PairRule {
    kind: PairKind,
    opens: bool,
    closes: bool,
}

impl PairRule {
    fn apply(self, depth: &mut [usize; PairKind::COUNT]) {
        let depth = &mut depth[self.kind.index()];
        match (self.opens, self.closes) {
            // same character on both sides: toggle
            (true, true) => *depth = if *depth > 0 { *depth - 1 } else { 1 },
            (true, false) => *depth += 1,
            (false, true) => *depth = depth.saturating_sub(1),
            (false, false) => {}
        }
    }

    fn is_closer_only(self) -> bool {
        self.closes && !self.opens
    }
}

/// Splits text into sentence boundaries according to a symbol table
#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    table: Arc<SymbolTable>,
    terminals: HashMap<char, Symbol>,
    pairs: HashMap<char, PairRule>,
}

impl SentenceExtractor {
    /// Create an extractor owning its symbol table
    pub fn new(table: SymbolTable) -> Result<Self> {
        Self::from_shared(Arc::new(table))
    }

    /// Create an extractor over a shared symbol table
    ///
    /// Fails if the table lacks any terminal or paired role.
    pub fn from_shared(table: Arc<SymbolTable>) -> Result<Self> {
        let mut terminals = HashMap::new();
        for role in SymbolRole::TERMINALS {
            let symbol = table.get(role)?;
            terminals
                .entry(symbol.value())
                .or_insert_with(|| symbol.clone());
        }

        let mut pairs: HashMap<char, PairRule> = HashMap::new();
        for kind in PairKind::ALL {
            let (open_role, close_role) = kind.roles();
            let open = table.get(open_role)?.value();
            let close = table.get(close_role)?.value();

            for (ch, opening) in [(open, true), (close, false)] {
                let rule = pairs.entry(ch).or_insert(PairRule {
                    kind,
                    opens: false,
                    closes: false,
                });
                // a character already claimed by another pair kind keeps it
                if rule.kind == kind {
                    if opening {
                        rule.opens = true;
                    } else {
                        rule.closes = true;
                    }
                }
            }
        }

        log::debug!(
            "Sentence extractor ready for \"{}\" with terminals {:?}",
            table.language(),
            terminals.keys().collect::<Vec<_>>()
        );

        Ok(Self {
            table,
            terminals,
            pairs,
        })
    }

    /// Extract sentence boundaries from `text`
    pub fn extract(&self, text: &str) -> Extraction {
        let mut boundaries = Vec::new();
        let last_position = self.extract_into(text, &mut boundaries);
        Extraction {
            boundaries,
            last_position,
        }
    }

    /// Append the boundaries of `text` to `out`
    ///
    /// Returns the offset up to which the text was partitioned into
    /// sentences: the end of the last boundary, or 0 when there is none.
    pub fn extract_into(&self, text: &str, out: &mut Vec<Boundary>) -> usize {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut depth = [0usize; PairKind::COUNT];
        let mut start = 0;
        let mut last_position = 0;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i].1;

            if let Some(rule) = self.pairs.get(&ch) {
                rule.apply(&mut depth);
                i += 1;
                continue;
            }

            let first = match self.terminals.get(&ch) {
                Some(symbol) if depth.iter().all(|&d| d == 0) => symbol,
                _ => {
                    i += 1;
                    continue;
                }
            };

            if first.needs_before_space() && i > 0 && !chars[i - 1].1.is_whitespace() {
                i += 1;
                continue;
            }

            let mut last = first;
            let mut j = i + 1;
            while let Some(symbol) = chars.get(j).and_then(|&(_, c)| self.terminals.get(&c)) {
                last = symbol;
                j += 1;
            }
            while chars.get(j).is_some_and(|&(_, c)| self.is_closer(c)) {
                j += 1;
            }

            let next = chars.get(j).map(|&(_, c)| c);
            i = j;
            if !Self::ends_sentence(last, next) {
                continue;
            }

            let end = chars.get(j).map_or(text.len(), |&(offset, _)| offset);
            log::trace!("sentence boundary {start}..{end}");
            out.push(Boundary::new(start, end));
            start = end;
            last_position = end;
        }

        if text[start..].chars().any(|c| !c.is_whitespace()) {
            log::trace!("trailing sentence {start}..{}", text.len());
            out.push(Boundary::new(start, text.len()));
            last_position = text.len();
        }

        last_position
    }

    /// The table this extractor was built from
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Whether `ch` can end a sentence under this table
    pub fn is_terminal(&self, ch: char) -> bool {
        self.terminals.contains_key(&ch)
    }

    fn is_closer(&self, ch: char) -> bool {
        self.pairs.get(&ch).is_some_and(|rule| rule.is_closer_only())
    }

    fn ends_sentence(symbol: &Symbol, next: Option<char>) -> bool {
        match next {
            None => true,
            Some(ch) if symbol.is_invalid_neighbor(ch) => false,
            Some(ch) => !symbol.needs_after_space() || ch.is_whitespace(),
        }
    }
}
