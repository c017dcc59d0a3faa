//! Load registries from declarative JSON files.
//!
//! The builtin tables in `sable_registry` are the default source of truth,
//! but a registry may also be supplied as a JSON file (one array of records,
//! file order = registry order). Raw records carry `severity`, `category`,
//! and `arity` as strings; conversion into the typed model enforces the
//! closed sets, so an unknown value is a hard load error and nothing is
//! generated from it.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use sable_registry::{Diagnostic, OperatorArity, RegistryError, Token, TokenCategory};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read registry file `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("registry file `{path}` is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("token `{name}` has unknown category `{category}` (expected `keyword`, `operator`, or `plain`)")]
    UnknownCategory { name: String, category: String },
    #[error("operator token `{name}` has unknown arity `{arity}` (expected `unary` or `binary`)")]
    UnknownArity { name: String, arity: String },
    #[error("operator token `{name}` is missing an `arity` field")]
    MissingArity { name: String },
}

#[derive(Debug, Deserialize)]
struct RawDiagnostic {
    sname: String,
    cname: String,
    severity: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    name: String,
    /// Defaults to `name` for self-spelling tokens (keywords, classes).
    #[serde(default)]
    spelling: Option<String>,
    category: String,
    /// Required for operators, ignored otherwise.
    #[serde(default)]
    arity: Option<String>,
}

/// Load a diagnostic registry from a JSON file, in file order.
pub fn load_diagnostics(path: &Path) -> Result<Vec<Diagnostic>, LoadError> {
    let raw: Vec<RawDiagnostic> = read_json(path)?;
    raw.into_iter()
        .map(|r| {
            let severity = r.severity.parse()?;
            Ok(Diagnostic {
                sname: r.sname,
                cname: r.cname,
                severity,
                message: r.message,
            })
        })
        .collect()
}

/// Load a token registry from a JSON file, in file order.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>, LoadError> {
    let raw: Vec<RawToken> = read_json(path)?;
    raw.into_iter().map(token_from_raw).collect()
}

fn token_from_raw(r: RawToken) -> Result<Token, LoadError> {
    let category = match r.category.as_str() {
        "keyword" => TokenCategory::Keyword,
        "plain" => TokenCategory::Plain,
        "operator" => match r.arity.as_deref() {
            Some("unary") => TokenCategory::Operator(OperatorArity::Unary),
            Some("binary") => TokenCategory::Operator(OperatorArity::Binary),
            Some(other) => {
                return Err(LoadError::UnknownArity {
                    name: r.name,
                    arity: other.to_string(),
                });
            }
            None => return Err(LoadError::MissingArity { name: r.name }),
        },
        other => {
            return Err(LoadError::UnknownCategory {
                name: r.name,
                category: other.to_string(),
            });
        }
    };
    let spelling = r.spelling.unwrap_or_else(|| r.name.clone());
    Ok(Token {
        name: r.name,
        spelling,
        category,
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
