//! The check context handed to every test method.
//!
//! ## Failure reporting
//!
//! Every failing check does two things, in this order:
//! 1. appends its message to the context's [`FailureLog`];
//! 2. returns the failure immediately as `Err`.
//!
//! A method that propagates with `?` therefore stops at its first failed check and contributes exactly one log
//! entry. Only a caller that inspects the `Err` and keeps going can accumulate several entries before calling
//! [`Assert::report_accumulated_failures`]. Both behaviours are kept on purpose; neither one replaces the other.
//!
//! ## Null values
//!
//! The null-equivalent is `None`. `is_null`/`not_null` take an `Option`, and `equal` over `Option<T>` passes
//! when both sides are `None` or both are `Some` and equal.

use std::fmt::Debug;

use mintest_core::{Numeric, messages, numeric};

use crate::failure::{AssertionFailure, CheckResult, Failure};
use crate::log::FailureLog;

/// Per-run assertion context owning the failure log.
#[derive(Debug, Default)]
pub struct Assert {
    log: FailureLog,
}

impl Assert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert that two values are equal.
    ///
    /// ## Errors
    ///
    /// Fails with `expected <expected>, but was <actual>` when `expected != actual`.
    pub fn equal<T: PartialEq + Debug>(&mut self, expected: T, actual: T) -> CheckResult {
        if expected == actual {
            return Ok(());
        }
        self.fail(messages::equal_mismatch(&expected, &actual))
    }

    /// Assert that a condition is true.
    pub fn is_true(&mut self, condition: bool) -> CheckResult {
        if condition {
            return Ok(());
        }
        self.fail(messages::EXPECTED_TRUE)
    }

    /// Assert that a condition is false.
    pub fn is_false(&mut self, condition: bool) -> CheckResult {
        if !condition {
            return Ok(());
        }
        self.fail(messages::EXPECTED_FALSE)
    }

    /// Assert that a value is present.
    pub fn not_null<T>(&mut self, value: Option<T>) -> CheckResult {
        if value.is_some() {
            return Ok(());
        }
        self.fail(messages::EXPECTED_VALUE)
    }

    /// Assert that a value is absent.
    ///
    /// ## Errors
    ///
    /// Fails with `expected null, but was <value>` when `value` is `Some`.
    pub fn is_null<T: Debug>(&mut self, value: Option<T>) -> CheckResult {
        match value {
            None => Ok(()),
            Some(present) => self.fail(messages::expected_null(&present)),
        }
    }

    /// Assert `actual > expected`, comparing the widened values.
    pub fn greater_than<A: Numeric, E: Numeric>(&mut self, actual: A, expected: E) -> CheckResult {
        if numeric::exceeds(actual, expected) {
            return Ok(());
        }
        self.fail(messages::expected_greater(&actual, &expected))
    }

    /// Assert `actual < expected`, comparing the widened values.
    pub fn less_than<A: Numeric, E: Numeric>(&mut self, actual: A, expected: E) -> CheckResult {
        if numeric::falls_below(actual, expected) {
            return Ok(());
        }
        self.fail(messages::expected_less(&actual, &expected))
    }

    /// Raise every logged failure as one aggregate failure.
    ///
    /// The log is left untouched, so calling this twice reports the same entries twice.
    pub fn report_accumulated_failures(&self) -> CheckResult {
        if self.log.is_empty() {
            return Ok(());
        }
        Err(Failure::Aggregate {
            messages: self.log.entries().to_vec(),
        })
    }

    /// Read-only view of the failure log.
    pub fn failures(&self) -> &FailureLog {
        &self.log
    }

    fn fail(&mut self, message: impl Into<String>) -> CheckResult {
        let message = message.into();
        self.log.record(message.clone());
        Err(AssertionFailure::new(message).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_passes_on_equal_values() {
        let mut assert = Assert::new();
        assert!(assert.equal(4, 2 + 2).is_ok());
        assert!(assert.equal("Hello", "Hello").is_ok());
        assert!(assert.failures().is_empty());
    }

    #[test]
    fn test_equal_failure_embeds_expected_and_actual() {
        let mut assert = Assert::new();
        let err = assert.equal(5, 2 + 2).unwrap_err();
        let text = err.to_string();
        assert!(text.contains('5') && text.contains('4'), "unexpected message: {text}");
        assert_eq!(assert.failures().len(), 1);
    }

    #[test]
    fn test_equal_null_semantics() {
        let mut assert = Assert::new();
        assert!(assert.equal::<Option<i32>>(None, None).is_ok());
        assert!(assert.equal(Some(1), Some(1)).is_ok());
        assert!(assert.equal(None, Some(1)).is_err());
        assert!(assert.equal(Some(1), None).is_err());
        assert_eq!(assert.failures().len(), 2);
    }

    #[test]
    fn test_boolean_checks() {
        let mut assert = Assert::new();
        assert!(assert.is_true(3 > 2).is_ok());
        assert!(assert.is_false(2 > 3).is_ok());
        assert_eq!(
            assert.is_true(false).unwrap_err().to_string(),
            "assertion failed: expected true, but was false"
        );
        assert!(assert.is_false(true).is_err());
    }

    #[test]
    fn test_null_checks() {
        let mut assert = Assert::new();
        assert!(assert.not_null(Some("Hello")).is_ok());
        assert!(assert.is_null::<&str>(None).is_ok());
        assert!(assert.not_null::<&str>(None).is_err());

        let err = assert.is_null(Some("Hello")).unwrap_err();
        assert!(err.to_string().contains("Hello"));
    }

    #[test]
    fn test_ordered_checks_widen_across_types() {
        let mut assert = Assert::new();
        assert!(assert.greater_than(3_i32, 2.5_f64).is_ok());
        assert!(assert.less_than(2.5_f32, 3_u8).is_ok());
        assert!(assert.greater_than(2_i64, 2.0_f64).is_err());
        assert_eq!(
            assert.less_than(3, 2).unwrap_err().to_string(),
            "assertion failed: expected 3 < 2"
        );
    }

    #[test]
    fn test_report_accumulated_failures_is_noop_on_empty_log() {
        let assert = Assert::new();
        assert!(assert.report_accumulated_failures().is_ok());
    }

    #[test]
    fn test_report_accumulated_failures_joins_entries() {
        let mut assert = Assert::new();
        // A caller that keeps going after a failed check accumulates entries.
        let _ = assert.equal(1, 2);
        let _ = assert.is_true(false);

        let err = assert.report_accumulated_failures().unwrap_err();
        assert!(err.is_aggregate());
        assert_eq!(
            err.to_string(),
            "test failures:\nexpected 1, but was 2\nexpected true, but was false"
        );
        // Reporting does not clear the log.
        assert_eq!(assert.failures().len(), 2);
    }

    #[test]
    fn test_fail_fast_records_one_entry_per_propagated_body() {
        fn body(assert: &mut Assert) -> CheckResult {
            assert.is_true(false)?;
            assert.is_true(false)?;
            Ok(())
        }

        let mut assert = Assert::new();
        assert!(body(&mut assert).is_err());
        assert_eq!(assert.failures().len(), 1);
    }
}
