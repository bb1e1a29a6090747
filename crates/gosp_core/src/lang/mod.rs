//! gosp language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings and metadata via
//! `const` registry tables, instead of comparing strings all over the analyzer.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The tables are built at compile time and never mutated, so lookups are safe from any thread.
//!
//! ## Examples
//! ```rust
//! use gosp_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("letrec"), Some(KeywordId::LetRec));
//! assert_eq!(keywords::as_str(KeywordId::LetRec), "letrec");
//! ```

pub mod conventions;
pub mod keywords;
pub mod punctuation;
pub mod registry;
