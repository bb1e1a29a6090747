//! Diagnostics for the reader and the analyzer.
//!
//! Every failure is a single [`SyntaxError`] value: which form rejected the input, why, and the offending datum
//! rendered back to text. Errors carry a [`Span`] so the CLI can render them against the source with `miette`.

use std::fmt::{self, Write as _};

use gosp_core::lang::registry::Arity;
use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::datum::{Datum, Span};

/// Form name used for procedure-call errors.
pub const APPLICATION: &str = "application";

/// Form name used for reader errors.
pub const READ: &str = "read";

/// Longest fragment, in bytes, kept on an error before it is cut with ` ...`.
pub const FRAGMENT_LIMIT: usize = 160;

/// Broad classification of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Wrong number of parts for a form.
    Arity,
    /// Right number of parts, wrong shape (non-identifier target, malformed binding, misplaced `.`).
    Shape,
    /// Form used outside the context it needs (`unquote` with no enclosing `quasiquote`).
    Context,
    /// `select` clause not headed by a send, receive or `default`.
    SelectClause,
    /// Source text could not be read into datums.
    Reader,
    /// Nesting exceeded the configured analysis depth.
    Depth,
}

impl SyntaxErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            SyntaxErrorKind::Arity => "gosp::syntax::arity",
            SyntaxErrorKind::Shape => "gosp::syntax::shape",
            SyntaxErrorKind::Context => "gosp::syntax::context",
            SyntaxErrorKind::SelectClause => "gosp::syntax::select_clause",
            SyntaxErrorKind::Reader => "gosp::syntax::read",
            SyntaxErrorKind::Depth => "gosp::syntax::depth",
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            SyntaxErrorKind::Context => Some("unquote and unquote-splicing are only meaningful inside a quasiquote template"),
            SyntaxErrorKind::SelectClause => {
                Some("each clause starts with (chan-send ch v), (chan-recv ch), or default")
            }
            SyntaxErrorKind::Depth => Some("raise the limit with ParseOptions::with_max_depth"),
            SyntaxErrorKind::Arity | SyntaxErrorKind::Shape | SyntaxErrorKind::Reader => None,
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyntaxErrorKind::Arity => "arity error",
            SyntaxErrorKind::Shape => "syntax error",
            SyntaxErrorKind::Context => "context error",
            SyntaxErrorKind::SelectClause => "select clause error",
            SyntaxErrorKind::Reader => "read error",
            SyntaxErrorKind::Depth => "nesting error",
        })
    }
}

/// A syntax error with the form that raised it and the offending fragment.
///
/// ## Examples
/// ```rust
/// use gosp_syntax::parser;
///
/// let err = parser::parse_str("repl", "(if 1)").unwrap_err();
/// assert_eq!(err[0].form, "if");
/// assert_eq!(err[0].to_string(), "if: bad syntax, expected 2 or 3 parts, given 1, in: (if 1)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{form}: {message}{}", Fragment(.fragment))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Form (keyword, `application`, `read`, ...) that rejected the input.
    pub form: String,
    pub message: String,
    /// Offending datum rendered as text; empty when there is nothing useful to show.
    pub fragment: String,
    pub span: Span,
    /// Name of the source unit, when the error came through `parse_str`.
    pub source_name: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, form: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            form: form.into(),
            message: message.into(),
            fragment: String::new(),
            span: Span::default(),
            source_name: None,
        }
    }

    pub fn shape(form: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(SyntaxErrorKind::Shape, form, message)
    }

    pub fn context(form: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(SyntaxErrorKind::Context, form, message)
    }

    /// `form` received `given` parts where `expected` were required.
    pub fn arity(form: impl Into<String>, expected: Arity, given: usize) -> Self {
        Self::new(
            SyntaxErrorKind::Arity,
            form,
            format!("bad syntax, expected {}, given {given}", expected.describe()),
        )
    }

    pub fn select_clause(form: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(SyntaxErrorKind::SelectClause, form, message)
    }

    pub fn reader(message: impl Into<String>, span: Span) -> Self {
        Self::new(SyntaxErrorKind::Reader, READ, message).at(span)
    }

    pub fn depth(limit: usize) -> Self {
        Self::new(
            SyntaxErrorKind::Depth,
            APPLICATION,
            format!("nesting deeper than {limit} levels"),
        )
    }

    /// Attach the offending datum: its text (cut at [`FRAGMENT_LIMIT`]) becomes the fragment and its span the
    /// location.
    pub fn with_datum(mut self, datum: &Datum) -> Self {
        self.fragment = fragment(datum);
        self.span = datum.span;
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Tag the error with the source unit it came from; an existing tag is kept.
    pub fn in_source(mut self, name: &str) -> Self {
        if self.source_name.is_none() {
            self.source_name = Some(name.to_string());
        }
        self
    }
}

/// Render `datum`, stopping once [`FRAGMENT_LIMIT`] bytes have been written.
fn fragment(datum: &Datum) -> String {
    let mut out = Bounded {
        text: String::new(),
        room: FRAGMENT_LIMIT,
    };
    if write!(out, "{datum}").is_err() {
        out.text.push_str(" ...");
    }
    out.text
}

/// Writer that refuses output past its remaining room.
struct Bounded {
    text: String,
    room: usize,
}

impl fmt::Write for Bounded {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() <= self.room {
            self.text.push_str(s);
            self.room -= s.len();
            return Ok(());
        }
        let mut cut = self.room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.text.push_str(&s[..cut]);
        self.room = 0;
        Err(fmt::Error)
    }
}

/// Renders `", in: <fragment>"` when a fragment is present.
struct Fragment<'a>(&'a str);

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, ", in: {}", self.0)
        }
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.span.is_empty() {
            return None;
        }
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span.start..self.span.end);
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_fragment() {
        let err = SyntaxError::context("unquote", "not in quasiquote");
        assert_eq!(err.to_string(), "unquote: not in quasiquote");
    }

    #[test]
    fn test_with_datum_sets_fragment_and_span() {
        let datum = Datum::list(vec![Datum::symbol("go")]).with_span(Span::new(3, 7));
        let err = SyntaxError::arity("go", Arity::Exactly(1), 0).with_datum(&datum);
        assert_eq!(err.to_string(), "go: bad syntax, expected exactly 1 part, given 0, in: (go)");
        assert_eq!(err.span, Span::new(3, 7));
    }

    #[test]
    fn test_long_fragment_is_cut() {
        let datum = Datum::list((0..100).map(|i| Datum::symbol(format!("name{i}"))).collect());
        let err = SyntaxError::shape("define", "not an identifier").with_datum(&datum);
        assert!(err.fragment.ends_with(" ..."), "got: {}", err.fragment);
        assert_eq!(err.fragment.len(), FRAGMENT_LIMIT + " ...".len());
        assert!(err.fragment.starts_with("(name0 name1 name2"));
    }

    #[test]
    fn test_fragment_cut_respects_char_boundaries() {
        let datum = Datum::string("λ".repeat(FRAGMENT_LIMIT));
        let err = SyntaxError::shape("quote", "bad datum").with_datum(&datum);
        assert!(err.fragment.ends_with(" ..."));
        assert!(err.fragment.len() <= FRAGMENT_LIMIT + " ...".len());
    }

    #[test]
    fn test_in_source_keeps_first_tag() {
        let err = SyntaxError::shape("set!", "not an identifier")
            .in_source("a.gsp")
            .in_source("b.gsp");
        assert_eq!(err.source_name.as_deref(), Some("a.gsp"));
    }

    #[test]
    fn test_diagnostic_code_and_labels() {
        let err = SyntaxError::reader("unterminated string", Span::new(0, 4));
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("gosp::syntax::read"));
        assert_eq!(err.labels().map(|labels| labels.count()), Some(1));

        let unlocated = SyntaxError::shape(APPLICATION, "not a procedure");
        assert!(unlocated.labels().is_none());
    }
}
