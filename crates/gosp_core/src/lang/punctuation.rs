//! Punctuation vocabulary.
//!
//! This module defines the canonical set of punctuation the reader understands: list delimiters, the dotted-tail
//! marker, and the quote-family abbreviations (`'x` reads as `(quote x)`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - This module is vocabulary only (spellings + metadata). It does not read source text.
//!
//! ## Examples
//! ```rust
//! use gosp_core::lang::keywords::KeywordId;
//! use gosp_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(",@"), Some(PunctuationId::UnquoteSplicing));
//! assert_eq!(punctuation::expansion(PunctuationId::Quasiquote), Some(KeywordId::Quasiquote));
//! assert_eq!(punctuation::as_str(PunctuationId::Dot), ".");
//! ```

use super::keywords::KeywordId;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses and brackets.
    Delimiter,
    /// Reader abbreviations that wrap the next datum in a quoting form.
    Abbreviation,
    /// The `.` in a dotted list.
    Marker,
}

/// Stable identifier for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,

    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,

    Dot,
}

/// Metadata for one punctuation spelling.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    /// Special form an abbreviation expands to.
    pub expands_to: Option<KeywordId>,
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    delim(PunctuationId::LParen, "("),
    delim(PunctuationId::RParen, ")"),
    delim(PunctuationId::LBracket, "["),
    delim(PunctuationId::RBracket, "]"),
    abbrev(PunctuationId::Quote, "'", KeywordId::Quote),
    abbrev(PunctuationId::Quasiquote, "`", KeywordId::Quasiquote),
    abbrev(PunctuationId::Unquote, ",", KeywordId::Unquote),
    abbrev(PunctuationId::UnquoteSplicing, ",@", KeywordId::UnquoteSplicing),
    PunctuationInfo {
        id: PunctuationId::Dot,
        canonical: ".",
        category: PunctuationCategory::Marker,
        expands_to: None,
    },
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Quoting form an abbreviation stands for, or `None` for delimiters and markers.
pub fn expansion(id: PunctuationId) -> Option<KeywordId> {
    info_for(id).expands_to
}

/// Closing delimiter that matches an opening one.
pub fn closing(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        _ => None,
    }
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn delim(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category: PunctuationCategory::Delimiter,
        expands_to: None,
    }
}

const fn abbrev(id: PunctuationId, canonical: &'static str, form: KeywordId) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category: PunctuationCategory::Abbreviation,
        expands_to: Some(form),
    }
}
