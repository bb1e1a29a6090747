//! CLI module for gosp
//!
//! ## Commands
//!
//! - `read <file>` - Print the datum tree the reader produces
//! - `parse <file>` - Analyze and print every top-level form
//! - `check <file>` - Analyze and report diagnostics only
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

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use gosp_syntax::options::{BatchPolicy, ParseOptions};
use thiserror::Error;

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax analyzer for gosp, a Go-flavoured Lisp
#[derive(Parser, Debug)]
#[command(name = "gosp")]
#[command(version = VERSION)]
#[command(about = "Syntax analyzer for gosp, a Go-flavoured Lisp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the datum tree read from a file (debug)
    Read {
        /// Source file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Analyze a file and print every top-level form
    Parse {
        /// Source file to analyze
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Analyze a file and report diagnostics only
    Check {
        /// Source file to analyze
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        analysis: AnalysisArgs,
    },
}

/// Analyzer knobs shared by `parse` and `check`.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Report every failing form instead of stopping at the first
    #[arg(long)]
    pub collect_errors: bool,

    /// Maximum nesting depth the analyzer descends into
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

impl AnalysisArgs {
    pub fn to_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new();
        if self.collect_errors {
            options = options.with_batch(BatchPolicy::Collect);
        }
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }
        options
    }
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
        Command::Read { file } => commands::read_file(&file.to_string_lossy()),
        Command::Parse { file, analysis } => commands::parse_file(&file.to_string_lossy(), &analysis.to_options()),
        Command::Check { file, analysis } => commands::check_file(&file.to_string_lossy(), &analysis.to_options()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::try_parse_from(["gosp", "parse", "prog.gsp"]).unwrap();
        let Command::Parse { file, analysis } = cli.command else {
            panic!("Expected Parse command");
        };
        assert_eq!(file, PathBuf::from("prog.gsp"));
        assert!(!analysis.collect_errors);
        assert!(analysis.max_depth.is_none());
    }

    #[test]
    fn test_cli_parse_check_with_flags() {
        let cli =
            Cli::try_parse_from(["gosp", "check", "prog.gsp", "--collect-errors", "--max-depth", "64"]).unwrap();
        let Command::Check { analysis, .. } = cli.command else {
            panic!("Expected Check command");
        };
        let options = analysis.to_options();
        assert_eq!(options.batch, BatchPolicy::Collect);
        assert_eq!(options.max_depth, 64);
    }

    #[test]
    fn test_cli_parse_read() {
        let cli = Cli::try_parse_from(["gosp", "read", "prog.gsp"]).unwrap();
        assert!(matches!(cli.command, Command::Read { .. }));
    }

    #[test]
    fn test_cli_requires_a_command() {
        assert!(Cli::try_parse_from(["gosp"]).is_err());
        assert!(Cli::try_parse_from(["gosp", "read", "a.gsp", "--collect-errors"]).is_err());
    }

    #[test]
    fn test_default_analysis_args_match_default_options() {
        let args = AnalysisArgs {
            collect_errors: false,
            max_depth: None,
        };
        let options = args.to_options();
        let defaults = ParseOptions::default();
        assert_eq!(options.batch, defaults.batch);
        assert_eq!(options.max_depth, defaults.max_depth);
    }
}
