//! Symbol roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EoserError;

/// The logical category a literal character is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolRole {
    FullStop,
    Space,
    ExclamationMark,
    NumberSign,
    DollarSign,
    PercentSign,
    QuestionMark,
    Ampersand,
    LeftParenthesis,
    RightParenthesis,
    Asterisk,
    Comma,
    PlusSign,
    HyphenSign,
    Slash,
    Colon,
    Semicolon,
    LessThanSign,
    EqualSign,
    GreaterThanSign,
    AtMark,
    LeftSquareBracket,
    RightSquareBracket,
    Backslash,
    CircumflexAccent,
    LowLine,
    LeftCurlyBracket,
    RightCurlyBracket,
    VerticalBar,
    Tilde,
    LeftSingleQuotationMark,
    RightSingleQuotationMark,
    LeftDoubleQuotationMark,
    RightDoubleQuotationMark,
}

/// Paired symbol categories tracked by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    Parenthesis,
    SingleQuotation,
    DoubleQuotation,
}

impl PairKind {
    /// Number of pair kinds, used to size depth counters
    pub const COUNT: usize = 3;

    /// All pair kinds
    pub const ALL: [PairKind; Self::COUNT] = [
        PairKind::Parenthesis,
        PairKind::SingleQuotation,
        PairKind::DoubleQuotation,
    ];

    /// Stable index of this kind
    pub fn index(self) -> usize {
        match self {
            PairKind::Parenthesis => 0,
            PairKind::SingleQuotation => 1,
            PairKind::DoubleQuotation => 2,
        }
    }

    /// Opening and closing roles of this kind
    pub fn roles(self) -> (SymbolRole, SymbolRole) {
        match self {
            PairKind::Parenthesis => (SymbolRole::LeftParenthesis, SymbolRole::RightParenthesis),
            PairKind::SingleQuotation => (
                SymbolRole::LeftSingleQuotationMark,
                SymbolRole::RightSingleQuotationMark,
            ),
            PairKind::DoubleQuotation => (
                SymbolRole::LeftDoubleQuotationMark,
                SymbolRole::RightDoubleQuotationMark,
            ),
        }
    }
}

impl SymbolRole {
    /// Every role, in declaration order
    pub const ALL: [SymbolRole; 34] = [
        SymbolRole::FullStop,
        SymbolRole::Space,
        SymbolRole::ExclamationMark,
        SymbolRole::NumberSign,
        SymbolRole::DollarSign,
        SymbolRole::PercentSign,
        SymbolRole::QuestionMark,
        SymbolRole::Ampersand,
        SymbolRole::LeftParenthesis,
        SymbolRole::RightParenthesis,
        SymbolRole::Asterisk,
        SymbolRole::Comma,
        SymbolRole::PlusSign,
        SymbolRole::HyphenSign,
        SymbolRole::Slash,
        SymbolRole::Colon,
        SymbolRole::Semicolon,
        SymbolRole::LessThanSign,
        SymbolRole::EqualSign,
        SymbolRole::GreaterThanSign,
        SymbolRole::AtMark,
        SymbolRole::LeftSquareBracket,
        SymbolRole::RightSquareBracket,
        SymbolRole::Backslash,
        SymbolRole::CircumflexAccent,
        SymbolRole::LowLine,
        SymbolRole::LeftCurlyBracket,
        SymbolRole::RightCurlyBracket,
        SymbolRole::VerticalBar,
        SymbolRole::Tilde,
        SymbolRole::LeftSingleQuotationMark,
        SymbolRole::RightSingleQuotationMark,
        SymbolRole::LeftDoubleQuotationMark,
        SymbolRole::RightDoubleQuotationMark,
    ];

    /// Roles that can end a sentence
    pub const TERMINALS: [SymbolRole; 3] = [
        SymbolRole::FullStop,
        SymbolRole::QuestionMark,
        SymbolRole::ExclamationMark,
    ];

    /// Configuration spelling of the role
    pub fn name(self) -> &'static str {
        match self {
            SymbolRole::FullStop => "FULL_STOP",
            SymbolRole::Space => "SPACE",
            SymbolRole::ExclamationMark => "EXCLAMATION_MARK",
            SymbolRole::NumberSign => "NUMBER_SIGN",
            SymbolRole::DollarSign => "DOLLAR_SIGN",
            SymbolRole::PercentSign => "PERCENT_SIGN",
            SymbolRole::QuestionMark => "QUESTION_MARK",
            SymbolRole::Ampersand => "AMPERSAND",
            SymbolRole::LeftParenthesis => "LEFT_PARENTHESIS",
            SymbolRole::RightParenthesis => "RIGHT_PARENTHESIS",
            SymbolRole::Asterisk => "ASTERISK",
            SymbolRole::Comma => "COMMA",
            SymbolRole::PlusSign => "PLUS_SIGN",
            SymbolRole::HyphenSign => "HYPHEN_SIGN",
            SymbolRole::Slash => "SLASH",
            SymbolRole::Colon => "COLON",
            SymbolRole::Semicolon => "SEMICOLON",
            SymbolRole::LessThanSign => "LESS_THAN_SIGN",
            SymbolRole::EqualSign => "EQUAL_SIGN",
            SymbolRole::GreaterThanSign => "GREATER_THAN_SIGN",
            SymbolRole::AtMark => "AT_MARK",
            SymbolRole::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            SymbolRole::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            SymbolRole::Backslash => "BACKSLASH",
            SymbolRole::CircumflexAccent => "CIRCUMFLEX_ACCENT",
            SymbolRole::LowLine => "LOW_LINE",
            SymbolRole::LeftCurlyBracket => "LEFT_CURLY_BRACKET",
            SymbolRole::RightCurlyBracket => "RIGHT_CURLY_BRACKET",
            SymbolRole::VerticalBar => "VERTICAL_BAR",
            SymbolRole::Tilde => "TILDE",
            SymbolRole::LeftSingleQuotationMark => "LEFT_SINGLE_QUOTATION_MARK",
            SymbolRole::RightSingleQuotationMark => "RIGHT_SINGLE_QUOTATION_MARK",
            SymbolRole::LeftDoubleQuotationMark => "LEFT_DOUBLE_QUOTATION_MARK",
            SymbolRole::RightDoubleQuotationMark => "RIGHT_DOUBLE_QUOTATION_MARK",
        }
    }

    /// Whether this role can terminate a sentence
    #[inline]
    pub fn is_terminal(self) -> bool {
        Self::TERMINALS.contains(&self)
    }
}

impl fmt::Display for SymbolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolRole {
    type Err = EoserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| EoserError::UnknownSymbolRole(s.to_string()))
    }
}
