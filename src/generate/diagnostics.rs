//! Diagnostic artifact generation
//!
//! Produces the two diagnostic artifacts: the `DiagnosticKind` enum
//! definition, and the `impl` block carrying the total accessors
//! (`severity`, `message`, `sname`) plus the `parse_kind` reverse lookup.
//! All four functions are keyed by the one enumeration, so they can never
//! disagree about ordinals or names.

use std::collections::BTreeSet;

use sable_registry::Diagnostic;

use super::{GenerateError, write_header};
use crate::emit::LineWriter;

/// Generate the `DiagnosticKind` enum definition.
///
/// One variant per registry entry, in registry order; ordinal = position.
pub fn generate_enum(diagnostics: &[Diagnostic]) -> String {
    let mut w = LineWriter::new();
    write_header(&mut w);
    w.blank();
    w.writeln("/// Kinds of diagnostics the Sable front end can emit.");
    w.writeln("///");
    w.writeln("/// One variant per registry entry, in registry order; the discriminant is");
    w.writeln("/// the registry ordinal. Reordering or removing an entry is a breaking");
    w.writeln("/// change for consumers that reference raw ordinal values.");
    w.writeln("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.writeln("#[repr(u16)]");
    w.writeln("pub enum DiagnosticKind {");
    w.indent();
    for d in diagnostics {
        w.write(&d.cname);
        w.writeln(",");
    }
    w.dedent();
    w.writeln("}");
    w.finish()
}

/// Generate the `impl DiagnosticKind` block: total `const fn` accessors for
/// severity, message template, and short name, plus the map-backed reverse
/// lookup.
///
/// ## Errors
/// - [`GenerateError`] if any dispatch fails the arm-set/variant-set equality
///   check. Nothing is returned in that case, so a hole can never reach an
///   artifact.
pub fn generate_impl(diagnostics: &[Diagnostic]) -> Result<String, GenerateError> {
    let severity_arms = arms(diagnostics, |d| format!("Severity::{}", d.severity.as_str()));
    let message_arms = arms(diagnostics, |d| format!("{:?}", d.message));
    let sname_arms = arms(diagnostics, |d| format!("{:?}", d.sname));
    check_dispatch("severity", diagnostics, &severity_arms)?;
    check_dispatch("message", diagnostics, &message_arms)?;
    check_dispatch("sname", diagnostics, &sname_arms)?;

    let mut w = LineWriter::new();
    write_header(&mut w);
    w.blank();
    w.writeln("use std::collections::HashMap;");
    w.writeln("use std::sync::OnceLock;");
    w.blank();
    w.writeln("impl DiagnosticKind {");
    w.indent();
    emit_accessor(
        &mut w,
        "severity",
        "Severity",
        "Severity class of this diagnostic kind.",
        &severity_arms,
    );
    w.blank();
    emit_accessor(
        &mut w,
        "message",
        "&'static str",
        "Message template, with positional `{}` placeholders left unexpanded.",
        &message_arms,
    );
    w.blank();
    emit_accessor(
        &mut w,
        "sname",
        "&'static str",
        "Stable short name, as used by configuration and tooling.",
        &sname_arms,
    );
    w.blank();
    emit_parse_kind(&mut w, diagnostics);
    w.dedent();
    w.writeln("}");
    Ok(w.finish())
}

/// One `(variant, value)` pair per registry entry, in registry order.
fn arms(diagnostics: &[Diagnostic], value: impl Fn(&Diagnostic) -> String) -> Vec<(String, String)> {
    diagnostics.iter().map(|d| (d.cname.clone(), value(d))).collect()
}

/// Assert that the emitted arm set equals the enum variant set: every arm
/// names a real variant, and there is exactly one arm per entry.
fn check_dispatch(
    function: &'static str,
    diagnostics: &[Diagnostic],
    arms: &[(String, String)],
) -> Result<(), GenerateError> {
    let variants: BTreeSet<&str> = diagnostics.iter().map(|d| d.cname.as_str()).collect();
    for (variant, _) in arms {
        if !variants.contains(variant.as_str()) {
            return Err(GenerateError::UnknownArm {
                function,
                variant: variant.clone(),
            });
        }
    }
    let emitted: BTreeSet<&str> = arms.iter().map(|(v, _)| v.as_str()).collect();
    if arms.len() != diagnostics.len() || emitted.len() != variants.len() {
        return Err(GenerateError::IncompleteDispatch {
            function,
            expected: diagnostics.len(),
            emitted: arms.len(),
        });
    }
    Ok(())
}

fn emit_accessor(w: &mut LineWriter, name: &str, ret: &str, doc: &str, arms: &[(String, String)]) {
    w.writeln(&format!("/// {doc}"));
    w.writeln(&format!("pub const fn {name}(self) -> {ret} {{"));
    w.indent();
    w.writeln("match self {");
    w.indent();
    for (variant, value) in arms {
        w.writeln(&format!("DiagnosticKind::{variant} => {value},"));
    }
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
}

fn emit_parse_kind(w: &mut LineWriter, diagnostics: &[Diagnostic]) {
    w.writeln("/// Resolve a short name back to its kind.");
    w.writeln("///");
    w.writeln("/// Unknown names are a normal `None`, never an error: callers resolving");
    w.writeln("/// configuration-supplied names must tolerate stale or misspelled input.");
    w.writeln("pub fn parse_kind(sname: &str) -> Option<DiagnosticKind> {");
    w.indent();
    w.writeln("static BY_SNAME: OnceLock<HashMap<&'static str, DiagnosticKind>> = OnceLock::new();");
    w.writeln("let map = BY_SNAME.get_or_init(|| {");
    w.indent();
    w.writeln("HashMap::from([");
    w.indent();
    for d in diagnostics {
        w.writeln(&format!("({:?}, DiagnosticKind::{}),", d.sname, d.cname));
    }
    w.dedent();
    w.writeln("])");
    w.dedent();
    w.writeln("});");
    w.writeln("map.get(sname).copied()");
    w.dedent();
    w.writeln("}");
}
