//! Property-based tests for the check operations.
//!
//! These lock in the equality law over nullable values and the by-value comparison of mixed numeric types.

use mintest_assert::Assert;
use proptest::prelude::*;

proptest! {
    /// `equal` passes iff both are absent, or both are present and equal.
    #[test]
    fn equal_matches_nullable_equality(a in proptest::option::of(-50i32..50), b in proptest::option::of(-50i32..50)) {
        let mut assert = Assert::new();
        let expected_pass = match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
        prop_assert_eq!(assert.equal(a, b).is_ok(), expected_pass);
        prop_assert_eq!(assert.failures().len(), usize::from(!expected_pass));
    }

    /// Integer and float operands compare by value.
    #[test]
    fn greater_than_compares_widened_values(a in -1_000_000i32..1_000_000, b in -1.0e6f64..1.0e6) {
        let mut assert = Assert::new();
        prop_assert_eq!(assert.greater_than(a, b).is_ok(), f64::from(a) > b);
        prop_assert_eq!(assert.less_than(a, b).is_ok(), f64::from(a) < b);
    }

    /// Every failing check adds exactly one log entry, and the aggregate lists them in order.
    #[test]
    fn aggregate_lists_every_failed_check(conditions in proptest::collection::vec(any::<bool>(), 0..16)) {
        let mut assert = Assert::new();
        for &condition in &conditions {
            let _ = assert.is_true(condition);
        }
        let failed = conditions.iter().filter(|c| !**c).count();
        prop_assert_eq!(assert.failures().len(), failed);

        match assert.report_accumulated_failures() {
            Ok(()) => prop_assert_eq!(failed, 0),
            Err(err) => prop_assert_eq!(err.to_string().lines().count(), failed + 1),
        }
    }
}
