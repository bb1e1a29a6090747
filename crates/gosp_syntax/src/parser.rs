//! Analyzer for gosp
//!
//! Converts the datum tree produced by the reader into typed AST [`Node`]s. Each list is dispatched on its head:
//! a special-form keyword goes to that form's parslet, anything else is a procedure call.
//!
//! ## Examples
//!
//! ```rust
//! use gosp_syntax::parser;
//!
//! let nodes = parser::parse_str("example", "(define ((adder n) x) (+ n x))").unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].to_string(), "(define adder (lambda (n) (lambda (x) (+ n x))))");
//! ```

use crate::ast::*;
use crate::datum::{Datum, DatumKind};
use crate::diagnostics::{APPLICATION, SyntaxError, SyntaxErrorKind};
use crate::options::{BatchPolicy, ParseOptions};
use crate::reader;
use gosp_core::lang::conventions::{CHAN_RECV, CHAN_RECV_ARGS, CHAN_SEND, CHAN_SEND_ARGS, SELECT_DEFAULT};
use gosp_core::lang::keywords::{self, KeywordId};

// NOTE: This module is split across multiple files using `include!` to keep all parslets in the same Rust module
// (shared private helpers, one `impl Parser`) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/forms.rs");
include!("parser/formals.rs");
include!("parser/literals.rs");
include!("parser/quasiquote.rs");
include!("parser/select.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
