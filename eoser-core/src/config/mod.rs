//! Symbol configuration documents
//!
//! A configuration document declares a language and an ordered list of
//! symbol overrides. The loader validates each entry (known role, exactly
//! one character) so the rest of the crate only ever sees well-formed
//! [`Symbol`](crate::symbols::Symbol) values.

mod loader;
mod types;

pub use loader::{ConfigurationLoader, SymbolConfiguration};
