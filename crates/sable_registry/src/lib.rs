//! Diagnostic and token kind registries for the Sable compiler front end.
//!
//! This crate is the single source of truth for two closed vocabularies:
//! the diagnostics the front end can emit, and the token kinds its scanner
//! produces. Every generated artifact (enum definitions, accessor dispatch,
//! reverse lookup, spelling table, per-category sections) is derived from the
//! tables defined here so the artifacts can never drift apart.
//!
//! ## Notes
//!
//! - Registries are intentionally **pure**: no IO, no global state, no
//!   generator-specific types. Generation lives in the `sablegen` crate.
//! - Registry order is significant: it assigns enum ordinals. Reordering or
//!   removing an entry is a breaking change for consumers that reference raw
//!   ordinal values, and must be a deliberate edit to the tables.

pub mod diagnostics;
pub mod tokens;
pub mod validate;

pub use diagnostics::{Diagnostic, Severity, builtin_diagnostics, find_by_sname};
pub use tokens::{OperatorArity, Token, TokenCategory, builtin_tokens, camel_case};
pub use validate::{RegistryError, validate_diagnostics, validate_tokens};
