//! Define the diagnostic vocabulary for the Sable front end.
//!
//! Each entry pairs a stable short name (`sname`, used by configuration and
//! tooling to select or suppress a diagnostic) with an identifier-safe
//! variant name (`cname`, the generated enum case), a severity from the
//! closed set, and a message template.
//!
//! ## Notes
//! - [`builtin_diagnostics`] returns entries in canonical order; the position
//!   of an entry is its enum ordinal in the generated artifact.
//! - Message templates may contain positional `{}` placeholders. Placeholder
//!   substitution happens in the diagnostic runtime, not here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::RegistryError;

/// Severity class of a diagnostic. Closed set; anything else is rejected by
/// [`Severity::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Fatal,
    Hint,
}

impl Severity {
    /// Canonical spelling, as it appears in generated artifacts.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Fatal => "Fatal",
            Severity::Hint => "Hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Error" => Ok(Severity::Error),
            "Warning" => Ok(Severity::Warning),
            "Fatal" => Ok(Severity::Fatal),
            "Hint" => Ok(Severity::Hint),
            other => Err(RegistryError::InvalidSeverity(other.to_string())),
        }
    }
}

/// A reportable front-end message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable, human-referenceable short name (kebab-case).
    pub sname: String,
    /// Identifier-safe name used as the generated enum variant.
    pub cname: String,
    pub severity: Severity,
    /// Message template with positional `{}` placeholders left unexpanded.
    pub message: String,
}

fn diag(sname: &str, cname: &str, severity: Severity, message: &str) -> Diagnostic {
    Diagnostic {
        sname: sname.to_string(),
        cname: cname.to_string(),
        severity,
        message: message.to_string(),
    }
}

/// The compiled-in diagnostic registry, in canonical order.
///
/// ## Notes
/// - Entry position assigns the enum ordinal. Append new entries at the end
///   of their group; never reorder existing ones casually.
pub fn builtin_diagnostics() -> Vec<Diagnostic> {
    use Severity::{Error, Fatal, Hint, Warning};
    vec![
        diag(
            "lex-unterminated-bcomment",
            "UnterminatedBComment",
            Error,
            "unterminated /* comment",
        ),
        diag(
            "lex-float-no-exp",
            "FloatNoExp",
            Fatal,
            "float point has trailing `{}` but has no exponential part",
        ),
        diag(
            "lex-float-leading-zero",
            "FloatLeadingZero",
            Warning,
            "float begins with extra zeros `{}`",
        ),
        diag("parse-expected", "Expected", Error, "expected {}"),
        diag(
            "parse-int-too-big",
            "IntTooBig",
            Error,
            "this integer is too big for the evaluator",
        ),
        diag(
            "parse-redundant-paren",
            "RedundantParen",
            Warning,
            "redundant parentheses",
        ),
        diag(
            "parse-attrpath-extra-dot",
            "AttrPathExtraDot",
            Error,
            "extra `.` at the end of attrpath",
        ),
        diag(
            "parse-select-extra-dot",
            "SelectExtraDot",
            Error,
            "extra `.` after expression, but missing attrpath",
        ),
        diag(
            "parse-unexpected-between",
            "UnexpectedBetween",
            Error,
            "unexpected {} between {} and {}",
        ),
        diag("parse-unexpected", "UnexpectedText", Error, "unexpected text"),
        diag(
            "parse-missing-sep-formals",
            "MissingSepFormals",
            Error,
            "missing separator `,` between two lambda formals",
        ),
        diag(
            "parse-lambda-arg-extra-at",
            "LambdaArgExtraAt",
            Error,
            "extra `@` for lambda arg",
        ),
        diag(
            "let-dynamic",
            "LetDynamic",
            Error,
            "dynamic attributes are not allowed in let ... in ... expression",
        ),
        diag("empty-inherit", "EmptyInherit", Warning, "empty inherit expression"),
        diag(
            "or-identifier",
            "OrIdentifier",
            Warning,
            "keyword `or` used as an identifier",
        ),
        diag(
            "deprecated-url-literal",
            "DeprecatedURL",
            Warning,
            "URL literal is deprecated",
        ),
        diag(
            "deprecated-let",
            "DeprecatedLet",
            Warning,
            "using deprecated `let' syntactic sugar `let {{..., body = ...}}' -> (rec {{..., body = ...}}).body'",
        ),
        diag(
            "path-trailing-slash",
            "PathTrailingSlash",
            Fatal,
            "path has a trailing slash",
        ),
        diag(
            "merge-diff-rec",
            "MergeDiffRec",
            Warning,
            "merging two attributes with different `rec` modifiers, the latter will be implicitly ignored",
        ),
        diag(
            "sema-duplicated-attrname",
            "DuplicatedAttrName",
            Error,
            "duplicated attrname `{}`",
        ),
        diag(
            "sema-dynamic-inherit",
            "DynamicInherit",
            Error,
            "dynamic attributes are not allowed in inherit",
        ),
        diag("sema-empty-formal", "EmptyFormal", Error, "empty formal"),
        diag(
            "sema-formal-missing-comma",
            "FormalMissingComma",
            Error,
            "missing `,` for lambda formal",
        ),
        diag(
            "sema-formal-extra-ellipsis",
            "FormalExtraEllipsis",
            Error,
            "extra `...` for lambda formal",
        ),
        diag(
            "sema-misplaced-ellipsis",
            "FormalMisplacedEllipsis",
            Error,
            "misplaced `...` for lambda formal",
        ),
        diag(
            "sema-dup-formal",
            "DuplicatedFormal",
            Error,
            "duplicated function formal",
        ),
        diag(
            "sema-dup-formal-arg",
            "DuplicatedFormalToArg",
            Error,
            "function argument duplicated to a function formal",
        ),
        diag(
            "sema-undefined-variable",
            "UndefinedVariable",
            Error,
            "undefined variable `{}`",
        ),
        diag(
            "sema-def-not-used",
            "DefinitionNotUsed",
            Hint,
            "definition `{}` is not used",
        ),
        diag(
            "sema-extra-rec",
            "ExtraRecursive",
            Warning,
            "attrset is not necessary to be `rec`ursive",
        ),
        diag("sema-extra-with", "ExtraWith", Warning, "unused `with` expression"),
        diag(
            "sema-escaping-with",
            "EscapingWith",
            Hint,
            "this variable comes from the scope outside of the `with` expression",
        ),
    ]
}

/// Look up a registry entry by short name.
///
/// ## Returns
/// - `Some(index)` of the entry whose `sname` matches, `None` otherwise.
///
/// ## Notes
/// - This is the tooling-side mirror of the generated `parse_kind` reverse
///   lookup; unknown names are a normal "no match", not an error.
pub fn find_by_sname(diagnostics: &[Diagnostic], sname: &str) -> Option<usize> {
    diagnostics.iter().position(|d| d.sname == sname)
}
