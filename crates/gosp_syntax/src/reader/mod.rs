//! Reader for gosp source text
//!
//! Turns text into the datum tree the analyzer consumes. Two passes:
//! - [`Lexer`] scans characters into [`Token`]s (delimiters, quote abbreviations, symbols, literals).
//! - [`Reader`] assembles tokens into [`Datum`]s, expanding `'x` into `(quote x)` and friends.
//!
//! ## Notes
//! - List nesting is tracked with an explicit frame stack rather than recursion. [`Datum`] renders and drops
//!   iteratively as well, so arbitrarily deep input can be read, printed and released.
//! - Both passes keep going after an error and report everything they found in one go.
//!
//! ## Examples
//! ```rust
//! use gosp_syntax::reader;
//!
//! let datums = reader::read("(define x 'y) ; comment").unwrap();
//! assert_eq!(datums.len(), 1);
//! assert_eq!(datums[0].to_string(), "(define x (quote y))");
//! ```

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::datum::{Datum, DatumKind, Literal, Span};
use crate::diagnostics::SyntaxError;
use gosp_core::lang::conventions::{FALSE_SPELLINGS, TRUE_SPELLINGS};
use gosp_core::lang::keywords::{self, KeywordId};
use gosp_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LEXER
// ============================================================================

/// Lexer for gosp source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            c if c.is_whitespace() => {}

            ';' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            '(' => self.punct(PunctuationId::LParen, start),
            ')' => self.punct(PunctuationId::RParen, start),
            '[' => self.punct(PunctuationId::LBracket, start),
            ']' => self.punct(PunctuationId::RBracket, start),
            '\'' => self.punct(PunctuationId::Quote, start),
            '`' => self.punct(PunctuationId::Quasiquote, start),
            ',' => {
                if self.peek() == Some('@') {
                    self.advance();
                    self.punct(PunctuationId::UnquoteSplicing, start);
                } else {
                    self.punct(PunctuationId::Unquote, start);
                }
            }

            '"' => self.scan_string(start),

            _ => self.scan_atom(start),
        }
    }

    fn scan_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    self.errors.push(SyntaxError::reader(
                        "unterminated string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some('"') => break,
                Some('\\') => {
                    let escape_start = self.current_pos - 1;
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('0') => value.push('\0'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        Some(other) => {
                            self.errors.push(SyntaxError::reader(
                                format!("unknown escape sequence `\\{other}`"),
                                Span::new(escape_start, self.current_pos),
                            ));
                        }
                        None => continue,
                    }
                }
                Some(c) => value.push(c),
            }
        }
        self.add_token(TokenKind::Literal(Literal::Str(value)), start);
    }

    fn scan_atom(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.advance();
        }

        let source = self.source;
        let spelling = &source[start..self.current_pos];

        if spelling == punctuation::as_str(PunctuationId::Dot) {
            self.punct(PunctuationId::Dot, start);
        } else if spelling.starts_with('#') {
            if TRUE_SPELLINGS.contains(&spelling) {
                self.add_token(TokenKind::Literal(Literal::Bool(true)), start);
            } else if FALSE_SPELLINGS.contains(&spelling) {
                self.add_token(TokenKind::Literal(Literal::Bool(false)), start);
            } else {
                self.errors.push(SyntaxError::reader(
                    format!("unsupported `#` syntax `{spelling}`"),
                    Span::new(start, self.current_pos),
                ));
            }
        } else if let Some(literal) = number(spelling) {
            self.add_token(TokenKind::Literal(literal), start);
        } else {
            let symbol = spelling.to_string();
            self.add_token(TokenKind::Symbol(symbol), start);
        }
    }
}

// ============================================================================
// READER
// ============================================================================

/// An open list (or the top level) being filled with datums.
struct Frame {
    /// Opening delimiter and its span; `None` for the top level.
    open: Option<(PunctuationId, Span)>,
    items: Vec<Datum>,
    /// Quote abbreviations waiting for the next datum in this frame.
    prefixes: Vec<(KeywordId, Span)>,
}

impl Frame {
    fn new(open: Option<(PunctuationId, Span)>) -> Self {
        Self {
            open,
            items: Vec::new(),
            prefixes: Vec::new(),
        }
    }

    /// Push a completed datum, wrapping it in any pending abbreviations (innermost first).
    fn push(&mut self, mut datum: Datum) {
        while let Some((form, span)) = self.prefixes.pop() {
            let keyword = Datum::symbol(keywords::as_str(form)).with_span(span);
            let whole = span.merge(datum.span);
            datum = Datum::new(DatumKind::List(vec![keyword, datum]), whole);
        }
        self.items.push(datum);
    }
}

/// Assembles a token stream into datums.
pub struct Reader<'a> {
    tokens: &'a [Token],
    frames: Vec<Frame>,
    errors: Vec<SyntaxError>,
}

impl<'a> Reader<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            frames: vec![Frame::new(None)],
            errors: Vec::new(),
        }
    }

    /// Read every top-level datum.
    pub fn read(mut self) -> Result<Vec<Datum>, Vec<SyntaxError>> {
        for token in self.tokens {
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Symbol(name) => {
                    let datum = Datum::new(DatumKind::Symbol(name.clone()), token.span);
                    self.emit(datum);
                }
                TokenKind::Literal(lit) => {
                    let datum = Datum::new(DatumKind::Literal(lit.clone()), token.span);
                    self.emit(datum);
                }
                TokenKind::Punctuation(id) => self.punctuation(*id, token.span),
            }
        }
        self.finish()
    }

    fn punctuation(&mut self, id: PunctuationId, span: Span) {
        match id {
            PunctuationId::LParen | PunctuationId::LBracket => {
                self.frames.push(Frame::new(Some((id, span))));
            }
            PunctuationId::RParen | PunctuationId::RBracket => self.close(id, span),
            PunctuationId::Dot => self.emit(Datum::dot().with_span(span)),
            PunctuationId::Quote
            | PunctuationId::Quasiquote
            | PunctuationId::Unquote
            | PunctuationId::UnquoteSplicing => {
                if let Some(form) = punctuation::expansion(id) {
                    self.current().prefixes.push((form, span));
                }
            }
        }
    }

    fn close(&mut self, id: PunctuationId, span: Span) {
        if self.frames.len() == 1 {
            self.errors.push(SyntaxError::reader(
                format!("unexpected `{}`", punctuation::as_str(id)),
                span,
            ));
            return;
        }
        self.dangling_prefixes(span);

        let Some(frame) = self.frames.pop() else {
            return;
        };
        let Some((open, open_span)) = frame.open else {
            return;
        };
        if punctuation::closing(open) != Some(id) {
            self.errors.push(SyntaxError::reader(
                format!(
                    "`{}` closed by `{}`",
                    punctuation::as_str(open),
                    punctuation::as_str(id)
                ),
                open_span.merge(span),
            ));
        }
        let datum = Datum::new(DatumKind::List(frame.items), open_span.merge(span));
        self.emit(datum);
    }

    fn finish(mut self) -> Result<Vec<Datum>, Vec<SyntaxError>> {
        let end = self.tokens.last().map(|t| t.span).unwrap_or_default();
        self.dangling_prefixes(end);

        while self.frames.len() > 1 {
            if let Some(Frame {
                open: Some((open, span)),
                ..
            }) = self.frames.pop()
            {
                self.errors.push(SyntaxError::reader(
                    format!("unclosed `{}`", punctuation::as_str(open)),
                    span,
                ));
            }
        }

        let top = self.frames.pop().map(|frame| frame.items).unwrap_or_default();
        if self.errors.is_empty() {
            Ok(top)
        } else {
            Err(self.errors)
        }
    }

    /// Report abbreviations in the current frame that never got a datum.
    fn dangling_prefixes(&mut self, at: Span) {
        let prefixes = std::mem::take(&mut self.current().prefixes);
        for (form, span) in prefixes {
            self.errors.push(SyntaxError::reader(
                format!("expected a datum after `{}`", keywords::as_str(form)),
                span.merge(at),
            ));
        }
    }

    fn emit(&mut self, datum: Datum) {
        self.current().push(datum);
    }

    fn current(&mut self) -> &mut Frame {
        // The top-level frame is only popped by `finish`.
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Characters that end an atom.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '\'' | '`' | ',' | '"' | ';')
}

/// Classify a numeric spelling; anything else is a symbol (`+`, `-`, `...`, `1+`).
fn number(spelling: &str) -> Option<Literal> {
    let first = spelling.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '+' | '-' | '.')) || !spelling.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Ok(n) = spelling.parse::<i64>() {
        return Some(Literal::Int(n));
    }
    spelling.parse::<f64>().ok().map(Literal::Float)
}

/// Convenience function to tokenize a source string.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}

/// Read source text into top-level datums.
///
/// Lexer errors are reported before any reading happens.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn read(source: &str) -> Result<Vec<Datum>, Vec<SyntaxError>> {
    let tokens = lex(source)?;
    let datums = Reader::new(&tokens).read()?;
    tracing::debug!(datum_count = datums.len(), "read source");
    Ok(datums)
}

// ============================================================================
// TESTS
// ============================================================================
