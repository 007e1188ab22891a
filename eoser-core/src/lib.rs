//! End-of-sentence extraction driven by configurable symbol tables
//!
//! This crate splits raw text into sentence spans. Which characters end a
//! sentence, and under which spacing conditions, is not hard-coded: it
//! comes from a [`SymbolTable`] holding one [`Symbol`] per [`SymbolRole`],
//! seeded with per-language defaults and optionally overridden from a
//! configuration document.
//!
//! # Architecture
//!
//! - **symbols**: symbol roles, symbol values and per-language tables
//! - **config**: loading symbol overrides from configuration documents
//! - **extractor**: the single-pass sentence boundary scanner
//! - **model**: sentence records for callers
//!
//! # Example
//!
//! ```rust
//! use eoser_core::{SentenceExtractor, SymbolTable};
//!
//! let extractor = SentenceExtractor::new(SymbolTable::english().unwrap()).unwrap();
//!
//! let text = "this is a pen. that is a paper.";
//! let extraction = extractor.extract(text);
//!
//! let sentences: Vec<&str> = extraction.sentences(text).collect();
//! assert_eq!(sentences, vec!["this is a pen.", " that is a paper."]);
//! assert_eq!(extraction.last_position, 31);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod symbols;

pub use config::{ConfigurationLoader, SymbolConfiguration};
pub use error::{EoserError, Result};
pub use extractor::{Boundary, Extraction, SentenceExtractor};
pub use model::Sentence;
pub use symbols::{LanguageInfo, Symbol, SymbolRole, SymbolTable, LANGUAGES};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
