#![forbid(unsafe_code)]
//! gosp: syntax analyzer for a Go-flavoured Lisp
//!
//! The crate is a thin shell over the workspace crates: `gosp_core` carries the special-form vocabulary and
//! `gosp_syntax` the reader and analyzer. This crate adds the `gosp` developer CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use gosp_core::lang;
pub use gosp_syntax::{ast, datum, diagnostics, options, parser, reader};

pub use gosp_syntax::ast::Node;
pub use gosp_syntax::diagnostics::SyntaxError;
pub use gosp_syntax::options::{BatchPolicy, ParseOptions};
pub use gosp_syntax::parser::{parse, parse_str, parse_str_with, parse_with};
