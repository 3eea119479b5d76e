#![forbid(unsafe_code)]
//! mintest: a minimal unit-test framework
//!
//! The crate discovers registered test units, runs every test method on a freshly constructed fixture,
//! classifies each invocation as passed or failed, and prints per-method and per-unit summary lines.
//! Assertions live in `mintest_assert`; shared vocabulary lives in `mintest_core`.
//!
//! ## Pipeline
//!
//! [`runner::run`] → [`discovery::TestDiscovery`] → [`engine::run_unit`] per unit → [`report::TestReporter`].
//!
//! ## Panic Policy
//!
//! - **Production code**: use `Result`/`Option` with `?`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Test bodies under execution**: panics are expected and captured by the engine; they never abort a run.

pub mod cli;
pub mod demo;
pub mod discovery;
pub mod engine;
pub mod report;
pub mod runner;

pub use mintest_assert::{Assert, AssertionFailure, CheckResult, Failure, FailureLog};

pub use discovery::{DiscoveryError, FixtureError, Registry, TestDiscovery, TestUnit};
pub use engine::{Fault, TestOutcome};
pub use report::{ClassSummary, ConsoleReporter, TestReporter};
pub use runner::{RunConfig, RunSummary};
