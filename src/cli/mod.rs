//! CLI module for the sablegen generator
//!
//! ## Commands
//!
//! - `diagnostic-enum <out>` - Generate the `DiagnosticKind` enum definition
//! - `diagnostic-impl <out>` - Generate the `DiagnosticKind` accessor impl
//! - `token-kinds <out>` - Generate the `TokenKind` enum and spelling table
//! - `token-sections <out>` - Generate the per-category token section macros
//! - `check` - Validate the registries without writing anything
//!
//! Each generation command reads the builtin registry by default, or a JSON
//! registry file given with `--registry`.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Registry-driven metadata generator for the Sable front end
#[derive(Parser, Debug)]
#[command(name = "sablegen")]
#[command(version = VERSION)]
#[command(about = "Generate Sable diagnostic and token metadata artifacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the DiagnosticKind enum definition
    DiagnosticEnum {
        /// Output file path
        #[arg(value_name = "OUT")]
        out: PathBuf,
        /// JSON diagnostic registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Generate the DiagnosticKind accessor impl and reverse lookup
    DiagnosticImpl {
        /// Output file path
        #[arg(value_name = "OUT")]
        out: PathBuf,
        /// JSON diagnostic registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Generate the TokenKind enum and spelling table
    TokenKinds {
        /// Output file path
        #[arg(value_name = "OUT")]
        out: PathBuf,
        /// JSON token registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Generate the per-category token section macros
    TokenSections {
        /// Output file path
        #[arg(value_name = "OUT")]
        out: PathBuf,
        /// JSON token registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Validate the registries without writing any artifact
    Check {
        /// JSON diagnostic registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        diagnostics: Option<PathBuf>,
        /// JSON token registry (default: builtin tables)
        #[arg(long, value_name = "FILE")]
        tokens: Option<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::DiagnosticEnum { out, registry } => {
            commands::diagnostic_enum(&out, registry.as_deref())
        }
        Command::DiagnosticImpl { out, registry } => {
            commands::diagnostic_impl(&out, registry.as_deref())
        }
        Command::TokenKinds { out, registry } => commands::token_kinds(&out, registry.as_deref()),
        Command::TokenSections { out, registry } => {
            commands::token_sections(&out, registry.as_deref())
        }
        Command::Check {
            diagnostics,
            tokens,
        } => commands::check(diagnostics.as_deref(), tokens.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================
