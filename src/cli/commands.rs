//! Command implementations
//!
//! Each generation command follows the same pipeline: load the registry
//! (builtin tables or a JSON file), validate it, generate the artifact text,
//! then write the output file in a single operation. Validation or generation
//! failures surface before anything touches the filesystem, so an existing
//! artifact is never clobbered by a half-finished run.

use std::fs;
use std::path::Path;

use tracing::info;

use sable_registry::{
    Diagnostic, Token, builtin_diagnostics, builtin_tokens, validate_diagnostics, validate_tokens,
};

use super::{CliError, CliResult, ExitCode};
use crate::generate::{diagnostics, tokens};
use crate::load;

/// Generate the `DiagnosticKind` enum definition.
pub fn diagnostic_enum(out: &Path, registry: Option<&Path>) -> CliResult<ExitCode> {
    let diags = load_diagnostics(registry)?;
    let text = diagnostics::generate_enum(&diags);
    write_artifact(out, &text)
}

/// Generate the `DiagnosticKind` accessor impl and reverse lookup.
pub fn diagnostic_impl(out: &Path, registry: Option<&Path>) -> CliResult<ExitCode> {
    let diags = load_diagnostics(registry)?;
    let text = diagnostics::generate_impl(&diags)
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    write_artifact(out, &text)
}

/// Generate the `TokenKind` enum and spelling table.
pub fn token_kinds(out: &Path, registry: Option<&Path>) -> CliResult<ExitCode> {
    let toks = load_tokens(registry)?;
    let text = tokens::generate_kinds(&toks);
    write_artifact(out, &text)
}

/// Generate the per-category token section macros.
pub fn token_sections(out: &Path, registry: Option<&Path>) -> CliResult<ExitCode> {
    let toks = load_tokens(registry)?;
    let text = tokens::generate_sections(&toks);
    write_artifact(out, &text)
}

/// Validate both registries and print a summary. Writes nothing.
pub fn check(diagnostics: Option<&Path>, tokens: Option<&Path>) -> CliResult<ExitCode> {
    let diags = load_diagnostics(diagnostics)?;
    let toks = load_tokens(tokens)?;
    println!("diagnostics: {} entries, ok", diags.len());
    println!("tokens: {} entries, ok", toks.len());
    Ok(ExitCode::SUCCESS)
}

/// Load the diagnostic registry (builtin or JSON file) and validate it.
fn load_diagnostics(registry: Option<&Path>) -> CliResult<Vec<Diagnostic>> {
    let diags = match registry {
        Some(path) => load::load_diagnostics(path)
            .map_err(|e| CliError::failure(format!("Error: {}", e)))?,
        None => builtin_diagnostics(),
    };
    validate_diagnostics(&diags).map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    Ok(diags)
}

/// Load the token registry (builtin or JSON file) and validate it.
fn load_tokens(registry: Option<&Path>) -> CliResult<Vec<Token>> {
    let toks = match registry {
        Some(path) => {
            load::load_tokens(path).map_err(|e| CliError::failure(format!("Error: {}", e)))?
        }
        None => builtin_tokens(),
    };
    validate_tokens(&toks).map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    Ok(toks)
}

/// Write a finished artifact in one operation.
fn write_artifact(out: &Path, text: &str) -> CliResult<ExitCode> {
    fs::write(out, text)
        .map_err(|e| CliError::failure(format!("Error writing {}: {}", out.display(), e)))?;
    info!(path = %out.display(), bytes = text.len(), "wrote artifact");
    Ok(ExitCode::SUCCESS)
}
