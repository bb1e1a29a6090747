//! Canonical language vocabulary for the gosp toolchain.
//!
//! This crate is intentionally tiny and dependency-free. It answers "what is this spelling?" questions (is `let*` a
//! special form, what does `,@` abbreviate, which identifier marks a `select` default clause) so that the reader, the
//! analyzer and downstream tooling agree on a single source of truth.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global mutable state, and no AST types.
//! - Enforcement of syntax rules lives in `gosp_syntax`; this crate only provides spellings and metadata.

pub mod lang;
