//! Raw datum tree produced by the reader and consumed by the analyzer.
//!
//! A datum is either an atom (a symbol or a scalar literal) or a list of further datums. Dotted lists keep the `.`
//! marker as an ordinary symbol element (`(a . b)` is the three-element list `a`, `.`, `b`); the analyzer decides
//! where a dot is legal.

use std::fmt;

use gosp_core::lang::punctuation::{self, PunctuationId};

/// Source location span (byte offsets).
///
/// Datums built in code (rather than read from text) use the default, empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Identifier spelling.
pub type Ident = String;

/// Scalar literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            // Keep a fractional part so the text reads back as a float.
            Literal::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Str(s) => write_escaped(f, s),
            Literal::Bool(true) => f.write_str("#t"),
            Literal::Bool(false) => f.write_str("#f"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Shape of a datum.
#[derive(Debug, Clone, PartialEq)]
pub enum DatumKind {
    Symbol(Ident),
    Literal(Literal),
    List(Vec<Datum>),
}

/// A node of the raw tree, with the span it was read from.
///
/// Equality ignores nothing: two datums read from different offsets compare unequal. Compare `kind` when only the
/// shape matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub kind: DatumKind,
    pub span: Span,
}

impl Datum {
    pub fn new(kind: DatumKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn symbol(name: impl Into<Ident>) -> Self {
        Self::new(DatumKind::Symbol(name.into()), Span::default())
    }

    pub fn int(value: i64) -> Self {
        Self::new(DatumKind::Literal(Literal::Int(value)), Span::default())
    }

    pub fn float(value: f64) -> Self {
        Self::new(DatumKind::Literal(Literal::Float(value)), Span::default())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(DatumKind::Literal(Literal::Str(value.into())), Span::default())
    }

    pub fn bool(value: bool) -> Self {
        Self::new(DatumKind::Literal(Literal::Bool(value)), Span::default())
    }

    pub fn list(items: Vec<Datum>) -> Self {
        Self::new(DatumKind::List(items), Span::default())
    }

    /// The `.` marker used in dotted lists.
    pub fn dot() -> Self {
        Self::symbol(punctuation::as_str(PunctuationId::Dot))
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Symbol spelling, if this datum is a symbol (including the `.` marker).
    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            DatumKind::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Elements, if this datum is a list.
    pub fn as_list(&self) -> Option<&[Datum]> {
        match &self.kind {
            DatumKind::List(items) => Some(items),
            _ => None,
        }
    }

    /// Return `true` for the dotted-list marker.
    pub fn is_dot(&self) -> bool {
        self.as_symbol() == Some(punctuation::as_str(PunctuationId::Dot))
    }

    /// Symbol spelling, excluding the `.` marker.
    pub fn identifier(&self) -> Option<&str> {
        self.as_symbol().filter(|_| !self.is_dot())
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Open lists are kept on an explicit stack; input depth is unbounded.
        let mut open: Vec<(std::slice::Iter<'_, Datum>, bool)> = Vec::new();
        let mut next = Some(self);
        loop {
            if let Some(datum) = next.take() {
                match &datum.kind {
                    DatumKind::Symbol(name) => f.write_str(name)?,
                    DatumKind::Literal(lit) => write!(f, "{lit}")?,
                    DatumKind::List(items) => {
                        f.write_str("(")?;
                        open.push((items.iter(), true));
                    }
                }
            }
            let Some((items, first)) = open.last_mut() else {
                return Ok(());
            };
            match items.next() {
                Some(item) => {
                    if !*first {
                        f.write_str(" ")?;
                    }
                    *first = false;
                    next = Some(item);
                }
                None => {
                    f.write_str(")")?;
                    open.pop();
                }
            }
        }
    }
}

impl Drop for Datum {
    fn drop(&mut self) {
        let DatumKind::List(items) = &mut self.kind else {
            return;
        };
        if items.iter().all(|item| item.as_list().is_none_or(|children| children.is_empty())) {
            return;
        }
        // Flatten nested lists into one worklist so dropping never recurses more than a level.
        let mut pending = std::mem::take(items);
        while let Some(mut datum) = pending.pop() {
            if let DatumKind::List(children) = &mut datum.kind {
                pending.append(children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_list() {
        let datum = Datum::list(vec![
            Datum::symbol("f"),
            Datum::list(vec![Datum::int(1), Datum::float(2.5), Datum::float(3.0)]),
            Datum::string("a \"b\"\n"),
            Datum::bool(false),
        ]);
        assert_eq!(datum.to_string(), r#"(f (1 2.5 3.0) "a \"b\"\n" #f)"#);
    }

    #[test]
    fn test_dot_is_symbol_but_not_identifier() {
        let dot = Datum::dot();
        assert!(dot.is_dot());
        assert_eq!(dot.as_symbol(), Some("."));
        assert_eq!(dot.identifier(), None);
        assert_eq!(Datum::symbol("x").identifier(), Some("x"));
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(4, 6).merge(Span::new(1, 3));
        assert_eq!(merged, Span::new(1, 6));
        assert!(Span::default().is_empty());
    }

    fn nested(depth: usize) -> Datum {
        let mut datum = Datum::symbol("x");
        for _ in 0..depth {
            datum = Datum::list(vec![Datum::symbol("f"), datum]);
        }
        datum
    }

    #[test]
    fn test_display_and_drop_deep_list() {
        let datum = nested(200_000);
        let text = datum.to_string();
        assert!(text.starts_with("(f (f (f x"), "got: {}", &text[..16]);
        assert_eq!(text.len(), 200_000 * 4 + 1);
        drop(datum);
    }

    #[test]
    fn test_clone_of_nested_list_is_equal() {
        let datum = nested(3);
        assert_eq!(datum.clone(), datum);
        assert_eq!(datum.to_string(), "(f (f (f x)))");
    }
}
