//! Assertion library for mintest test methods.
//!
//! Test methods receive an [`Assert`] check context. Every check either returns `Ok(())` or an immediate
//! [`Failure`], which the method propagates with `?` up to the invocation boundary. Each failing check also
//! records its message in the context's [`FailureLog`], which [`Assert::report_accumulated_failures`] can later
//! raise as a single aggregate failure.
//!
//! ```rust
//! use mintest_assert::{Assert, CheckResult};
//!
//! fn test_addition(assert: &mut Assert) -> CheckResult {
//!     assert.equal(4, 2 + 2)?;
//!     assert.is_true(3 > 2)
//! }
//!
//! let mut assert = Assert::new();
//! assert!(test_addition(&mut assert).is_ok());
//! assert!(assert.failures().is_empty());
//! ```

#![deny(clippy::unwrap_used)]

pub mod checks;
pub mod failure;
pub mod log;

pub use checks::Assert;
pub use failure::{AssertionFailure, CheckResult, Failure};
pub use log::FailureLog;
