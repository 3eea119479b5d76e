//! Failure values produced by checks.

use mintest_core::messages;
use thiserror::Error;

/// An unmet expectation raised by a single check.
///
/// Immutable once created; the message describes the expected and actual values or the failed condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", messages::ASSERTION_FAILED)]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic text without the `assertion failed` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The error side of every check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// A single check failed.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// `report_accumulated_failures` found a non-empty failure log.
    #[error("{}", messages::aggregate(.messages))]
    Aggregate { messages: Vec<String> },
}

impl Failure {
    /// Check whether this failure came from `report_accumulated_failures`.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Failure::Aggregate { .. })
    }
}

/// Result of a check, and of a whole test method body.
pub type CheckResult = Result<(), Failure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_display_is_prefixed() {
        let failure = AssertionFailure::new("expected 5, but was 4");
        assert_eq!(failure.to_string(), "assertion failed: expected 5, but was 4");
        assert_eq!(failure.message(), "expected 5, but was 4");
    }

    #[test]
    fn test_aggregate_display_lists_every_entry() {
        let failure = Failure::Aggregate {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(failure.to_string(), "test failures:\nfirst\nsecond");
        assert!(failure.is_aggregate());
    }

    #[test]
    fn test_assertion_converts_into_failure() {
        let failure: Failure = AssertionFailure::new("boom").into();
        assert!(!failure.is_aggregate());
        assert_eq!(failure.to_string(), "assertion failed: boom");
    }
}
