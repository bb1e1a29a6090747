//! Syntax frontend for gosp: datum tree, reader, AST, analyzer, diagnostics.
//!
//! The analyzer is the heart of the crate. It takes the raw tree of atoms and lists and turns it into typed
//! [`ast::Node`]s, desugaring curried definitions and quasiquote templates on the way.
//!
//! ## Notes
//! - This crate is syntax-only: nothing here evaluates forms, resolves names, or knows what `go` does at runtime.
//! - Special-form identity comes from the `gosp_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use gosp_syntax::{parser, reader};
//!
//! let datums = reader::read("(let ((x 1)) `(x ,x))").unwrap();
//! let nodes = parser::parse(&datums).unwrap();
//! assert_eq!(nodes[0].to_string(), "(let ((x 1)) `(x ,x))");
//! ```

pub mod ast;
pub mod datum;
pub mod diagnostics;
pub mod options;
pub mod parser;
pub mod reader;
