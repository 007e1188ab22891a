//! Symbol value type

use super::SymbolRole;

/// A literal character registered under a role, with its spacing rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    role: SymbolRole,
    value: char,
    invalid_chars: Vec<char>,
    needs_before_space: bool,
    needs_after_space: bool,
}

impl Symbol {
    /// Create a new symbol
    pub fn new(
        role: SymbolRole,
        value: char,
        invalid_chars: &str,
        needs_before_space: bool,
        needs_after_space: bool,
    ) -> Self {
        let mut invalid_chars: Vec<char> = invalid_chars.chars().collect();
        invalid_chars.sort_unstable();
        invalid_chars.dedup();

        Self {
            role,
            value,
            invalid_chars,
            needs_before_space,
            needs_after_space,
        }
    }

    /// Create a symbol with no invalid characters and no spacing requirements
    pub fn plain(role: SymbolRole, value: char) -> Self {
        Self::new(role, value, "", false, false)
    }

    pub fn role(&self) -> SymbolRole {
        self.role
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Characters that invalidate this symbol when found right after it
    pub fn invalid_chars(&self) -> &[char] {
        &self.invalid_chars
    }

    pub fn needs_before_space(&self) -> bool {
        self.needs_before_space
    }

    pub fn needs_after_space(&self) -> bool {
        self.needs_after_space
    }

    /// Check whether `ch` is in this symbol's invalid set
    #[inline]
    pub fn is_invalid_neighbor(&self, ch: char) -> bool {
        self.invalid_chars.binary_search(&ch).is_ok()
    }
}
