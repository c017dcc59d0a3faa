#![forbid(unsafe_code)]
//! sablegen — registry-driven metadata generator for the Sable front end.
//!
//! The Sable front end's diagnostic kinds and token kinds are declared once,
//! in the `sable_registry` tables. This crate turns a validated registry into
//! the textual artifacts the front end compiles against: enum definitions,
//! total accessor dispatch, a name-to-kind reverse lookup, the token spelling
//! table, and per-category token sections.
//!
//! ## Determinism
//!
//! Generation is pure and idempotent: an unchanged registry always produces
//! byte-identical output. Nothing time- or hash-order-dependent may leak into
//! emitted text; every generator routes its output through
//! [`emit::LineWriter`].
//!
//! ## Panic Policy
//!
//! Production code returns `Result` and propagates with `?`; `.unwrap()` and
//! `.expect()` are acceptable in tests only.

pub mod cli;
pub mod emit;
pub mod generate;
pub mod load;

pub use emit::LineWriter;
pub use generate::GenerateError;
pub use load::LoadError;
