//! Outcome reporting.
//!
//! ## TestReporter Trait
//!
//! The runner reports through the [`TestReporter`] trait so execution never formats output itself. The
//! default [`ConsoleReporter`] prints the line format downstream tooling parses:
//!
//! ```text
//! PASS: <method>
//! FAIL: <method> -> <cause>
//! Completed: <unit>, passed: <p>, failed: <f>
//! ```

use std::io::{self, Write};

use mintest_core::messages;

use crate::discovery::{DiscoveryError, UnitDescriptor};
use crate::engine::TestOutcome;

/// Pass/fail tally for one test unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSummary {
    pub passed: usize,
    pub failed: usize,
}

impl ClassSummary {
    pub fn record(&mut self, outcome: &TestOutcome) {
        if outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Trait for reporting test execution results.
pub trait TestReporter {
    /// Called once before discovery.
    fn on_run_start(&mut self, _namespace: &str) {}

    /// Called after each test method with its outcome.
    fn on_test_complete(&mut self, unit: &UnitDescriptor, method: &str, outcome: &TestOutcome);

    /// Called after the last method of a unit.
    fn on_unit_complete(&mut self, unit: &UnitDescriptor, summary: &ClassSummary);

    /// Called instead of any per-test callback when discovery fails.
    fn on_discovery_error(&mut self, error: &DiscoveryError);
}

/// Line-oriented reporter writing to any [`Write`] sink (stdout by default).
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the sink, e.g. to inspect a captured buffer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %err, "failed to write report line");
        }
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_test_complete(&mut self, _unit: &UnitDescriptor, method: &str, outcome: &TestOutcome) {
        let line = match outcome {
            TestOutcome::Passed => messages::pass_line(method),
            TestOutcome::Failed(cause) => messages::fail_line(method, &cause.to_string()),
        };
        self.emit(&line);
    }

    fn on_unit_complete(&mut self, unit: &UnitDescriptor, summary: &ClassSummary) {
        let line = messages::completed_line(&unit.qualified_name(), summary.passed, summary.failed);
        self.emit(&line);
        if let Err(err) = self.out.flush() {
            tracing::warn!(error = %err, "failed to flush report");
        }
    }

    fn on_discovery_error(&mut self, error: &DiscoveryError) {
        let line = match error {
            DiscoveryError::UnresolvedNamespace { namespace } => messages::unresolved_namespace(namespace),
        };
        self.emit(&line);
    }
}
