//! CLI module for the mintest runner
//!
//! With no arguments the runner discovers the `tests` namespace from the bundled registry and runs it.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute` returns `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use clap::Parser;
use mintest_core::conventions::DEFAULT_NAMESPACE;

use crate::demo;
use crate::discovery::TestDiscovery;
use crate::report::{ConsoleReporter, TestReporter};
use crate::runner::{self, RunConfig, RunSummary};

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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Discover and run registered test units
#[derive(Parser, Debug)]
#[command(name = "mintest")]
#[command(version)]
#[command(about = "Discover and run registered test units", long_about = None)]
pub struct Cli {
    /// Namespace to discover
    #[arg(long, value_name = "NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Exit with status 1 when any test method fails
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn config(&self) -> RunConfig {
        RunConfig {
            namespace: self.namespace.clone(),
            strict: self.strict,
            ..RunConfig::default()
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();
    let registry = demo::registry();
    let mut reporter = ConsoleReporter::stdout();

    match execute(&cli.config(), &registry, &mut reporter) {
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

/// Run the configured namespace and map the summary to an exit status.
pub fn execute(
    config: &RunConfig,
    discovery: &dyn TestDiscovery,
    reporter: &mut dyn TestReporter,
) -> CliResult<ExitCode> {
    let summary = runner::run(discovery, reporter, config);
    exit_status(config, &summary)
}

fn exit_status(config: &RunConfig, summary: &RunSummary) -> CliResult<ExitCode> {
    if config.strict && summary.has_failures() {
        // Report lines already printed; nothing more to say.
        return Err(CliError::failure(""));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
