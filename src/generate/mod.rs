//! Artifact generators
//!
//! Each generator turns a validated registry into one textual artifact.
//! Generators depend only on the registry model and the emission utilities;
//! they do not depend on each other, and all of them are pure: identical
//! registry in, byte-identical text out.

pub mod diagnostics;
pub mod tokens;

use thiserror::Error;

use crate::emit::LineWriter;

/// Generation-time exhaustiveness failure.
///
/// The generated accessors carry no wildcard arm, so a dispatch that does not
/// cover every enum variant must fail *here*, before any text leaves the
/// generator. The Rust compiler's native exhaustiveness check over the
/// emitted closed enum is the independent second net.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("dispatch for `{function}` is not exhaustive: expected {expected} arms, emitted {emitted}")]
    IncompleteDispatch {
        function: &'static str,
        expected: usize,
        emitted: usize,
    },
    #[error("dispatch for `{function}` emits an arm for `{variant}`, which is not an enum variant")]
    UnknownArm {
        function: &'static str,
        variant: String,
    },
}

/// Stamp the fixed artifact header. Contains nothing run-dependent, so
/// regeneration stays byte-identical.
pub(crate) fn write_header(w: &mut LineWriter) {
    w.writeln("// @generated by sablegen -- do not edit.");
    w.writeln("// Regenerate from the sable_registry tables instead.");
}
