//! Symbols and symbol tables
//!
//! A [`Symbol`] binds a [`SymbolRole`] to one literal character together
//! with the spacing rules that decide whether an occurrence is significant.
//! A [`SymbolTable`] holds one symbol per role for a language.

mod defaults;
mod role;
mod symbol;
mod table;

pub use defaults::{LanguageInfo, LANGUAGES};
pub use role::{PairKind, SymbolRole};
pub use symbol::Symbol;
pub use table::{SymbolTable, DEFAULT_LANGUAGE};
