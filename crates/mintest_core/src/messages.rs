//! Canonical user-facing message text.
//!
//! The assertion library and the console reporter both format through these helpers so that check diagnostics
//! and report lines stay byte-for-byte stable. Tooling parses the report lines, so treat them as an interface.

use std::fmt::Debug;

/// Prefix of an individual assertion failure's description.
pub const ASSERTION_FAILED: &str = "assertion failed";

/// First line of an aggregated failure report.
pub const AGGREGATE_HEADER: &str = "test failures:";

/// `is_true` failed.
pub const EXPECTED_TRUE: &str = "expected true, but was false";

/// `is_false` failed.
pub const EXPECTED_FALSE: &str = "expected false, but was true";

/// `not_null` failed.
pub const EXPECTED_VALUE: &str = "expected a value, but was null";

/// `equal` failed.
pub fn equal_mismatch(expected: &dyn Debug, actual: &dyn Debug) -> String {
    format!("expected {expected:?}, but was {actual:?}")
}

/// `is_null` failed on a present value.
pub fn expected_null(actual: &dyn Debug) -> String {
    format!("expected null, but was {actual:?}")
}

/// `greater_than` failed.
pub fn expected_greater(actual: &dyn Debug, expected: &dyn Debug) -> String {
    format!("expected {actual:?} > {expected:?}")
}

/// `less_than` failed.
pub fn expected_less(actual: &dyn Debug, expected: &dyn Debug) -> String {
    format!("expected {actual:?} < {expected:?}")
}

/// Join logged failure messages under [`AGGREGATE_HEADER`], one entry per line.
pub fn aggregate<S: AsRef<str>>(messages: &[S]) -> String {
    let mut out = String::from(AGGREGATE_HEADER);
    for message in messages {
        out.push('\n');
        out.push_str(message.as_ref());
    }
    out
}

// ============================================================================
// Report lines
// ============================================================================

/// `PASS: <method>`
pub fn pass_line(method: &str) -> String {
    format!("PASS: {method}")
}

/// `FAIL: <method> -> <cause>`
pub fn fail_line(method: &str, cause: &str) -> String {
    format!("FAIL: {method} -> {cause}")
}

/// `Completed: <unit>, passed: <p>, failed: <f>`
pub fn completed_line(unit: &str, passed: usize, failed: usize) -> String {
    format!("Completed: {unit}, passed: {passed}, failed: {failed}")
}

/// Line printed when a namespace cannot be resolved by discovery.
pub fn unresolved_namespace(namespace: &str) -> String {
    format!("Unable to resolve test namespace: {namespace}")
}
