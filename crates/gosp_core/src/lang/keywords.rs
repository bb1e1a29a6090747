//! Define the special-form vocabulary for gosp.
//!
//! This module is the single source of truth for identifiers that have dedicated syntax: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings, categories, the
//! number of parts each form accepts, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`Define` is an ordinary identifier).
//! - The table is read-only and built at compile time; the analyzer dispatches on [`KeywordId`] only.
//!
//! ## Examples
//! ```rust
//! use gosp_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("set!"), Some(KeywordId::Set));
//! assert_eq!(keywords::as_str(KeywordId::UnquoteSplicing), "unquote-splicing");
//! assert_eq!(keywords::from_str("car"), None);
//! ```

use super::registry::{Arity, Example};

/// Stable identifier for every special form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Definitions / closures
    Define,
    Lambda,
    Begin,

    // Binding forms
    Let,
    LetStar,
    LetRec,
    Set,

    // Control flow / application
    If,
    Apply,

    // Quoting
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,

    // Promises
    Delay,
    Force,

    // Concurrency
    Go,
    Select,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not change how a form is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Definition,
    Binding,
    ControlFlow,
    Quoting,
    Promise,
    Concurrency,
}

/// Metadata for a special form.
///
/// ## Notes
/// - `arity` counts the parts after the keyword: `(go (f x))` has one part.
/// - `examples` are used by generated documentation and by the registry guardrail tests, which require each example
///   to analyze cleanly. Keep them small.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub arity: Arity,
    pub examples: &'static [Example],
}

/// Registry of all special forms.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Definitions / closures
    info(
        KeywordId::Define,
        "define",
        KeywordCategory::Definition,
        Arity::AtLeast(2),
        &[
            ex("(define x 1)"),
            ex("(define (f x . rest) x)"),
            Example {
                code: "(define ((adder n) x) (+ n x))",
                note: Some("Curried definition; expands into nested lambdas."),
            },
        ],
    ),
    info(
        KeywordId::Lambda,
        "lambda",
        KeywordCategory::Definition,
        Arity::AtLeast(2),
        &[ex("(lambda (x y) (+ x y))"), ex("(lambda args args)"), ex("(lambda (x . ys) ys)")],
    ),
    info(
        KeywordId::Begin,
        "begin",
        KeywordCategory::ControlFlow,
        Arity::AtLeast(0),
        &[ex("(begin (display 1) 2)")],
    ),
    // Binding forms
    info(
        KeywordId::Let,
        "let",
        KeywordCategory::Binding,
        Arity::AtLeast(2),
        &[ex("(let ((x 1) (y 2)) (+ x y))")],
    ),
    info(
        KeywordId::LetStar,
        "let*",
        KeywordCategory::Binding,
        Arity::AtLeast(2),
        &[ex("(let* ((x 1) (y x)) y)")],
    ),
    info(
        KeywordId::LetRec,
        "letrec",
        KeywordCategory::Binding,
        Arity::AtLeast(2),
        &[ex("(letrec ((even? (lambda (n) (if (= n 0) #t (odd? (- n 1)))))) (even? 4))")],
    ),
    info(KeywordId::Set, "set!", KeywordCategory::Binding, Arity::Exactly(2), &[ex("(set! x 2)")]),
    // Control flow / application
    info(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        Arity::Between(2, 3),
        &[ex("(if (< a b) a b)"), ex("(if ready (go (work)))")],
    ),
    info(
        KeywordId::Apply,
        "apply",
        KeywordCategory::ControlFlow,
        Arity::AtLeast(2),
        &[ex("(apply + 1 '(2 3))")],
    ),
    // Quoting
    info(KeywordId::Quote, "quote", KeywordCategory::Quoting, Arity::Exactly(1), &[ex("'(1 (2 3) . 4)")]),
    info(
        KeywordId::Quasiquote,
        "quasiquote",
        KeywordCategory::Quoting,
        Arity::Exactly(1),
        &[
            ex("`(1 ,(+ 1 1) ,@(list 3 4))"),
            Example {
                code: "`(a `(b ,(c ,d)))",
                note: Some("Only `d` is escaped: it sits under two unquotes inside two quasiquotes."),
            },
        ],
    ),
    info(KeywordId::Unquote, "unquote", KeywordCategory::Quoting, Arity::Exactly(1), &[ex("`(x ,y)")]),
    info(
        KeywordId::UnquoteSplicing,
        "unquote-splicing",
        KeywordCategory::Quoting,
        Arity::Exactly(1),
        &[ex("`(x ,@ys)")],
    ),
    // Promises
    info(KeywordId::Delay, "delay", KeywordCategory::Promise, Arity::Exactly(1), &[ex("(delay (expensive))")]),
    info(KeywordId::Force, "force", KeywordCategory::Promise, Arity::Exactly(1), &[ex("(force p)")]),
    // Concurrency
    info(KeywordId::Go, "go", KeywordCategory::Concurrency, Arity::Exactly(1), &[ex("(go (worker ch))")]),
    info(
        KeywordId::Select,
        "select",
        KeywordCategory::Concurrency,
        Arity::AtLeast(1),
        &[ex("(select ((chan-recv ch) 'got) ((chan-send out 1) 'sent) (default 'idle))")],
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling string (e.g. `"let*"`).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Number of parts the form accepts after its keyword.
pub fn arity(id: KeywordId) -> Arity {
    info_for(id).arity
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error, and the guardrail tests cover
///   every variant).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` names a special form, `None` for ordinary identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    arity: Arity,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        arity,
        examples,
    }
}

const fn ex(code: &'static str) -> Example {
    Example { code, note: None }
}
