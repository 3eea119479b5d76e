//! Test invocation engine.
//!
//! For every test method the engine builds a fresh fixture, runs the method on it and classifies the result.
//! Everything a method can throw at us is captured at this boundary:
//!
//! - a check failure returned with `?` (single or aggregate),
//! - a fixture construction error, returned or panicked,
//! - any other panic unwinding out of the body (division by zero, indexing, explicit `panic!`).
//!
//! Nothing escapes past a single method, nothing is retried, and no fixture is shared between methods.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};

use mintest_assert::{Assert, Failure};
use thiserror::Error;

use crate::discovery::{FixtureError, MethodBody, TestUnit, UnitDescriptor};
use crate::report::{ClassSummary, TestReporter};

/// Why a test method failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A check failed, or accumulated failures were reported.
    #[error(transparent)]
    Check(#[from] Failure),

    #[error("fixture construction failed: {0}")]
    Construction(FixtureError),

    /// A panic that did not come from the assertion library.
    #[error("runtime fault: {message}")]
    Runtime { message: String },
}

/// Classification of one test method invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed(Fault),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    /// The failure cause, if any.
    pub fn cause(&self) -> Option<&Fault> {
        match self {
            TestOutcome::Passed => None,
            TestOutcome::Failed(fault) => Some(fault),
        }
    }
}

impl From<Result<(), Fault>> for TestOutcome {
    fn from(result: Result<(), Fault>) -> Self {
        match result {
            Ok(()) => TestOutcome::Passed,
            Err(fault) => TestOutcome::Failed(fault),
        }
    }
}

/// Run every test method of `unit` in declaration order and report each outcome.
#[tracing::instrument(skip_all, fields(unit = %unit.qualified_name(), method_count = unit.methods().len()))]
pub fn run_unit(unit: &UnitDescriptor, assert: &mut Assert, reporter: &mut dyn TestReporter) -> ClassSummary {
    let mut summary = ClassSummary::default();

    for method in unit.methods() {
        let outcome = TestOutcome::from(method.invoke(assert));
        match &outcome {
            TestOutcome::Passed => tracing::debug!(method = method.name(), "passed"),
            TestOutcome::Failed(Fault::Construction(err)) => {
                tracing::warn!(method = method.name(), error = %err, "fixture construction failed")
            }
            TestOutcome::Failed(fault) => tracing::debug!(method = method.name(), cause = %fault, "failed"),
        }

        summary.record(&outcome);
        reporter.on_test_complete(unit, method.name(), &outcome);
    }

    reporter.on_unit_complete(unit, &summary);
    summary
}

/// Construct a fresh `T` and run `body` on it, turning every fault into a [`Fault`].
pub(crate) fn invoke<T: TestUnit>(body: MethodBody<T>, assert: &mut Assert) -> Result<(), Fault> {
    let mut fixture = capture(T::construct)
        .map_err(|message| Fault::Construction(FixtureError::new(format!("panicked: {message}"))))?
        .map_err(Fault::Construction)?;

    let checked = capture(|| body(&mut fixture, assert)).map_err(|message| Fault::Runtime { message })?;
    checked.map_err(Fault::from)
}

/// Run `f`, returning the panic message if it unwinds.
fn capture<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Suppress the default panic hook while captured panics are expected.
///
/// The hook is process-wide; the previous one is restored on drop. Not meant for concurrent runs.
pub struct SilencedPanics {
    previous: Option<PanicHook>,
}

impl SilencedPanics {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for SilencedPanics {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}
