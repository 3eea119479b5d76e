//! Run orchestration: discovery, then every unit in turn, one method at a time.
//!
//! A run owns exactly one [`Assert`] context. Every method of every unit checks against it, so the failure log
//! spans the whole run and is handed back in the [`RunSummary`] once the run ends.
//!
//! Execution is strictly sequential. Do not spread units across threads without first giving each thread its
//! own context and dropping the process-wide panic hook swap.

use miette::Diagnostic;
use mintest_assert::{Assert, FailureLog};
use mintest_core::conventions;

use crate::discovery::{DiscoveryError, TestDiscovery};
use crate::engine::{self, SilencedPanics};
use crate::report::{ClassSummary, TestReporter};

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Namespace handed to discovery.
    pub namespace: String,
    /// Treat any failed method as a failed run (nonzero exit status).
    pub strict: bool,
    /// Swap out the panic hook so captured panics don't print backtrace noise.
    pub silence_panics: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            namespace: conventions::DEFAULT_NAMESPACE.to_string(),
            strict: false,
            silence_panics: true,
        }
    }
}

/// Class summary tagged with the unit it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSummary {
    pub unit: String,
    pub summary: ClassSummary,
}

/// What a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub namespace: String,
    pub units: Vec<UnitSummary>,
    pub discovery_error: Option<DiscoveryError>,
    /// Every failed check message observed during the run, in order.
    pub failure_log: FailureLog,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.units.iter().map(|u| u.summary.passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.units.iter().map(|u| u.summary.failed).sum()
    }

    /// Number of test outcomes produced.
    pub fn total(&self) -> usize {
        self.passed() + self.failed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Look up the summary of a unit by qualified name.
    pub fn unit(&self, qualified_name: &str) -> Option<&ClassSummary> {
        self.units.iter().find(|u| u.unit == qualified_name).map(|u| &u.summary)
    }
}

/// Discover `config.namespace` and run every unit found there.
///
/// Discovery failure is reported and ends the run with zero outcomes; it is never escalated further.
#[tracing::instrument(skip_all, fields(namespace = %config.namespace))]
pub fn run(discovery: &dyn TestDiscovery, reporter: &mut dyn TestReporter, config: &RunConfig) -> RunSummary {
    let mut summary = RunSummary {
        namespace: config.namespace.clone(),
        ..RunSummary::default()
    };

    reporter.on_run_start(&config.namespace);

    let units = match discovery.units(&config.namespace) {
        Ok(units) => units,
        Err(err) => {
            let code = err.code().map(|c| c.to_string()).unwrap_or_default();
            tracing::warn!(error = %err, code = %code, "discovery failed");
            reporter.on_discovery_error(&err);
            summary.discovery_error = Some(err);
            return summary;
        }
    };

    let _quiet = config.silence_panics.then(SilencedPanics::install);
    let mut assert = Assert::new();

    for unit in &units {
        let class_summary = engine::run_unit(unit, &mut assert, reporter);
        summary.units.push(UnitSummary {
            unit: unit.qualified_name(),
            summary: class_summary,
        });
    }

    tracing::info!(
        units = summary.units.len(),
        passed = summary.passed(),
        failed = summary.failed(),
        "run complete"
    );
    summary.failure_log = assert.failures().clone();
    summary
}
