//! Token types for the gosp reader.
//!
//! Punctuation tokens carry registry IDs from `gosp_core::lang::punctuation`, so the reader never compares raw
//! spellings for delimiters or quote abbreviations.

use crate::datum::{Literal, Span};
use gosp_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Punctuation(PunctuationId),
    Symbol(String),
    Literal(Literal),
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
