//! Abstract Syntax Tree definitions for gosp
//!
//! Every analyzed form is one [`Node`]. Nodes are built bottom-up by the analyzer and never mutated afterwards; an
//! evaluator consumes them without referring back to the datum tree they came from.
//!
//! Quoted data is represented as [`Node::Pair`] chains terminated by [`Node::Nil`], so the evaluator sees list
//! literals in the same shape it builds lists at runtime.

use std::fmt;

use gosp_core::lang::keywords::{self, KeywordId};
use gosp_core::lang::punctuation::{self, PunctuationId};

pub use crate::datum::{Ident, Literal};

/// Analyzed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Identifier reference (or a symbol inside quoted data).
    Name(Ident),
    Literal(Literal),

    Define(Define),
    /// Produced only by the function form of `define`.
    Function(Function),
    Lambda(Lambda),
    Begin(Block),
    Call(Call),
    Apply(Apply),
    If(If),
    Set(Set),
    Let(Let),

    Quote(Box<Node>),
    Quasiquote(Box<Node>),
    Unquote(Box<Node>),
    UnquoteSplicing(Box<Node>),

    Delay(Box<Node>),
    Force(Box<Node>),

    /// Expression the evaluator runs concurrently.
    Go(Box<Node>),
    Select(Vec<SelectClause>),

    /// Cons cell of literal list data.
    Pair(Box<Node>, Box<Node>),
    /// Empty list.
    Nil,
}

/// `(define name value)`; for `(define (name . formals) body...)` the value is a [`Node::Function`].
#[derive(Debug, Clone, PartialEq)]
pub struct Define {
    pub name: Ident,
    pub value: Box<Node>,
}

/// Named closure built from a function definition, curried heads included.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Ident,
    pub lambda: Lambda,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Params,
    pub body: Block,
}

/// Parameter list of a closure.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    /// `(a b c)`; possibly empty.
    Fixed(Vec<Ident>),
    /// `args`: every argument collected into one list.
    Rest(Ident),
    /// `(a b . rest)`; `fixed` is never empty.
    Variadic { fixed: Vec<Ident>, rest: Ident },
}

impl Params {
    /// Fixed parameter names in order.
    pub fn fixed(&self) -> &[Ident] {
        match self {
            Params::Fixed(fixed) | Params::Variadic { fixed, .. } => fixed,
            Params::Rest(_) => &[],
        }
    }

    /// Rest parameter, if any.
    pub fn rest(&self) -> Option<&Ident> {
        match self {
            Params::Fixed(_) => None,
            Params::Rest(rest) | Params::Variadic { rest, .. } => Some(rest),
        }
    }
}

/// Implicit sequence; evaluates to its last expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub exprs: Vec<Node>,
}

impl Block {
    pub fn new(exprs: Vec<Node>) -> Self {
        Self { exprs }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Apply {
    pub proc: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub test: Box<Node>,
    pub then: Box<Node>,
    pub otherwise: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub name: Ident,
    pub value: Box<Node>,
}

/// Which binding form a [`Let`] came from; the scoping difference is the evaluator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetKind {
    Let,
    LetStar,
    LetRec,
}

impl LetKind {
    /// Keyword that introduces this binding form.
    pub fn keyword(self) -> KeywordId {
        match self {
            LetKind::Let => KeywordId::Let,
            LetKind::LetStar => KeywordId::LetStar,
            LetKind::LetRec => KeywordId::LetRec,
        }
    }
}

/// `(let ((name init) ...) body...)`; `names` and `inits` are parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    pub kind: LetKind,
    pub names: Vec<Ident>,
    pub inits: Vec<Node>,
    pub body: Block,
}

/// One branch of a `select`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectClause {
    pub case: SelectCase,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectCase {
    /// `(chan-send chan value)`
    Send { chan: Node, value: Node },
    /// `(chan-recv chan)`
    Recv { chan: Node },
    /// `default`
    Default,
}

// ============================================================================
// List literal helpers
// ============================================================================

impl Node {
    /// Build a proper pair chain from `items`.
    pub fn list(items: Vec<Node>) -> Node {
        Node::improper(items, Node::Nil)
    }

    /// Build a pair chain from `items` ending in `tail` instead of `Nil`.
    pub fn improper(items: Vec<Node>, tail: Node) -> Node {
        items
            .into_iter()
            .rev()
            .fold(tail, |acc, item| Node::Pair(Box::new(item), Box::new(acc)))
    }

    pub fn cons(head: Node, tail: Node) -> Node {
        Node::Pair(Box::new(head), Box::new(tail))
    }

    pub fn name(ident: impl Into<Ident>) -> Node {
        Node::Name(ident.into())
    }

    /// Walk a pair chain, yielding each head. The walk stops at the first non-pair tail.
    pub fn iter_list(&self) -> ListIter<'_> {
        ListIter { cursor: self }
    }

    /// Items of a proper pair chain, or `None` if this is not a `Nil`-terminated chain.
    pub fn to_vec(&self) -> Option<Vec<&Node>> {
        let mut items = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                Node::Pair(head, tail) => {
                    items.push(head.as_ref());
                    cursor = tail.as_ref();
                }
                Node::Nil => return Some(items),
                _ => return None,
            }
        }
    }
}

/// Iterator over the heads of a pair chain.
pub struct ListIter<'a> {
    cursor: &'a Node,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            Node::Pair(head, tail) => {
                self.cursor = tail.as_ref();
                Some(head.as_ref())
            }
            _ => None,
        }
    }
}

// ============================================================================
// Display: s-expression rendering
// ============================================================================
//
// Escapes produced by the analyzer print with reader abbreviations (`,x`, `,@x`, `` `x ``, `'x`) while literal
// `(unquote ...)` data inside nested templates prints as a plain list, so the two stay distinguishable.

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Name(name) => f.write_str(name),
            Node::Literal(lit) => write!(f, "{lit}"),
            Node::Define(d) => write!(f, "({} {} {})", kw(KeywordId::Define), d.name, d.value),
            Node::Function(func) => write!(f, "{}", func.lambda),
            Node::Lambda(lambda) => write!(f, "{lambda}"),
            Node::Begin(block) => write!(f, "({}{})", kw(KeywordId::Begin), Spaced(&block.exprs)),
            Node::Call(call) => write!(f, "({}{})", call.callee, Spaced(&call.args)),
            Node::Apply(apply) => write!(f, "({} {}{})", kw(KeywordId::Apply), apply.proc, Spaced(&apply.args)),
            Node::If(i) => {
                write!(f, "({} {} {}", kw(KeywordId::If), i.test, i.then)?;
                if let Some(otherwise) = &i.otherwise {
                    write!(f, " {otherwise}")?;
                }
                f.write_str(")")
            }
            Node::Set(s) => write!(f, "({} {} {})", kw(KeywordId::Set), s.name, s.value),
            Node::Let(l) => {
                write!(f, "({} (", l.kind)?;
                for (i, (name, init)) in l.names.iter().zip(&l.inits).enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "({name} {init})")?;
                }
                write!(f, "){})", Spaced(&l.body.exprs))
            }
            Node::Quote(datum) => write!(f, "{}{datum}", punct(PunctuationId::Quote)),
            Node::Quasiquote(template) => write!(f, "{}{template}", punct(PunctuationId::Quasiquote)),
            Node::Unquote(expr) => write!(f, "{}{expr}", punct(PunctuationId::Unquote)),
            Node::UnquoteSplicing(expr) => write!(f, "{}{expr}", punct(PunctuationId::UnquoteSplicing)),
            Node::Delay(expr) => write!(f, "({} {expr})", kw(KeywordId::Delay)),
            Node::Force(expr) => write!(f, "({} {expr})", kw(KeywordId::Force)),
            Node::Go(expr) => write!(f, "({} {expr})", kw(KeywordId::Go)),
            Node::Select(clauses) => {
                write!(f, "({}", kw(KeywordId::Select))?;
                for clause in clauses {
                    write!(f, " ({}{})", clause.case, Spaced(&clause.body))?;
                }
                f.write_str(")")
            }
            Node::Pair(..) => {
                f.write_str("(")?;
                let mut cursor = self;
                let mut first = true;
                while let Node::Pair(head, tail) = cursor {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{head}")?;
                    first = false;
                    cursor = tail.as_ref();
                }
                if !matches!(cursor, Node::Nil) {
                    write!(f, " {} {cursor}", punct(PunctuationId::Dot))?;
                }
                f.write_str(")")
            }
            Node::Nil => f.write_str("()"),
        }
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {}{})", kw(KeywordId::Lambda), self.params, Spaced(&self.body.exprs))
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Params::Fixed(fixed) => write!(f, "({})", fixed.join(" ")),
            Params::Rest(rest) => f.write_str(rest),
            Params::Variadic { fixed, rest } => {
                write!(f, "({} {} {rest})", fixed.join(" "), punct(PunctuationId::Dot))
            }
        }
    }
}

impl fmt::Display for LetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(kw(self.keyword()))
    }
}

impl fmt::Display for SelectCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use gosp_core::lang::conventions::{CHAN_RECV, CHAN_SEND, SELECT_DEFAULT};
        match self {
            SelectCase::Send { chan, value } => write!(f, "({CHAN_SEND} {chan} {value})"),
            SelectCase::Recv { chan } => write!(f, "({CHAN_RECV} {chan})"),
            SelectCase::Default => f.write_str(SELECT_DEFAULT),
        }
    }
}

fn kw(id: KeywordId) -> &'static str {
    keywords::as_str(id)
}

fn punct(id: PunctuationId) -> &'static str {
    punctuation::as_str(id)
}

/// Renders each node preceded by a space.
struct Spaced<'a>(&'a [Node]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.0 {
            write!(f, " {node}")?;
        }
        Ok(())
    }
}
