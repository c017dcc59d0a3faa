//! Validate registries before any artifact is generated.
//!
//! Validation is a pure predicate over an in-memory table. A failure here
//! aborts generation before anything is written, so an invalid registry can
//! never reach a build artifact.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::tokens::Token;

/// Registry-level validation failure. Reports the first offending entry in
/// registry order, which keeps failures deterministic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate identifier `{0}` in registry")]
    DuplicateIdentifier(String),
    #[error("invalid severity `{0}` (expected one of: Error, Warning, Fatal, Hint)")]
    InvalidSeverity(String),
}

/// Check pairwise uniqueness of `sname` and `cname` across the diagnostic
/// registry.
///
/// Severity membership in the closed set is guaranteed by the [`crate::Severity`]
/// type for compiled-in tables; external loaders funnel through
/// `Severity::from_str`, which reports [`RegistryError::InvalidSeverity`].
pub fn validate_diagnostics(diagnostics: &[Diagnostic]) -> Result<(), RegistryError> {
    unique(diagnostics.iter().map(|d| d.sname.as_str()))?;
    unique(diagnostics.iter().map(|d| d.cname.as_str()))
}

/// Check pairwise uniqueness of the flattened, category-prefixed variant
/// identifier across the token registry.
pub fn validate_tokens(tokens: &[Token]) -> Result<(), RegistryError> {
    let idents: Vec<String> = tokens.iter().map(Token::variant_ident).collect();
    unique(idents.iter().map(String::as_str))
}

fn unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(RegistryError::DuplicateIdentifier(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::builtin_diagnostics;
    use crate::tokens::builtin_tokens;

    #[test]
    fn test_builtin_registries_validate() {
        validate_diagnostics(&builtin_diagnostics()).unwrap();
        validate_tokens(&builtin_tokens()).unwrap();
    }

    #[test]
    fn test_duplicate_sname_is_rejected() {
        let mut diags = builtin_diagnostics();
        diags[5].sname = diags[0].sname.clone();
        assert_eq!(
            validate_diagnostics(&diags),
            Err(RegistryError::DuplicateIdentifier(diags[0].sname.clone()))
        );
    }

    #[test]
    fn test_duplicate_cname_is_rejected() {
        let mut diags = builtin_diagnostics();
        diags[7].cname = "Expected".to_string();
        assert_eq!(
            validate_diagnostics(&diags),
            Err(RegistryError::DuplicateIdentifier("Expected".to_string()))
        );
    }

    #[test]
    fn test_duplicate_sname_wins_over_duplicate_cname() {
        // Both fields collide; the sname pass runs first.
        let mut diags = builtin_diagnostics();
        diags[1] = diags[0].clone();
        assert_eq!(
            validate_diagnostics(&diags),
            Err(RegistryError::DuplicateIdentifier(diags[0].sname.clone()))
        );
    }

    #[test]
    fn test_duplicate_token_ident_is_rejected() {
        let mut tokens = builtin_tokens();
        let dup = tokens[0].clone();
        tokens.push(dup);
        assert_eq!(
            validate_tokens(&tokens),
            Err(RegistryError::DuplicateIdentifier("KwIf".to_string()))
        );
    }

    #[test]
    fn test_same_name_across_categories_is_allowed() {
        // Keyword `or` and operator `or` flatten to different identifiers.
        let tokens = builtin_tokens();
        assert!(tokens.iter().filter(|t| t.name == "or").count() >= 2);
        validate_tokens(&tokens).unwrap();
    }

    #[test]
    fn test_error_display_names_the_entry() {
        let err = RegistryError::DuplicateIdentifier("parse-expected".to_string());
        assert_eq!(err.to_string(), "duplicate identifier `parse-expected` in registry");
        let err = RegistryError::InvalidSeverity("Remark".to_string());
        assert!(err.to_string().contains("`Remark`"));
    }
}
