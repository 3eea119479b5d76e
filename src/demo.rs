//! Bundled demo suite, registered under the default `tests` namespace.
//!
//! `MyTest` is deliberately left with one failing method so a plain run shows both report line shapes.

use std::panic;
use std::time::Instant;

use mintest_assert::{Assert, CheckResult};
use mintest_core::conventions::DEFAULT_NAMESPACE;

use crate::discovery::{FixtureError, Registry, TestUnit};

/// Register every demo unit.
pub fn register(registry: &mut Registry) {
    register_my_test(registry);
    register_my_test2(registry);
}

/// A registry holding only the demo suite.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    register(&mut registry);
    registry
}

pub fn register_my_test(registry: &mut Registry) {
    registry
        .unit::<MyTest>(DEFAULT_NAMESPACE, "MyTest")
        .marked("test_addition", MyTest::test_addition)
        .marked("test_failure", MyTest::test_failure)
        .marked("test_boolean", MyTest::test_boolean)
        .marked("test_null_check", MyTest::test_null_check)
        .register();
}

pub fn register_my_test2(registry: &mut Registry) {
    registry
        .unit::<MyTest2>(DEFAULT_NAMESPACE, "MyTest2")
        .marked("test_basic_assertions", MyTest2::test_basic_assertions)
        .marked("test_null_assertions", MyTest2::test_null_assertions)
        .marked("test_exception", MyTest2::test_exception)
        .marked("test_performance", MyTest2::test_performance)
        .marked("test_boundary_values", MyTest2::test_boundary_values)
        .register();
}

pub struct MyTest;

impl TestUnit for MyTest {
    fn construct() -> Result<Self, FixtureError> {
        Ok(MyTest)
    }
}

impl MyTest {
    fn test_addition(&mut self, assert: &mut Assert) -> CheckResult {
        assert.equal(4, 2 + 2)
    }

    fn test_failure(&mut self, assert: &mut Assert) -> CheckResult {
        assert.equal(5, 2 + 2)
    }

    fn test_boolean(&mut self, assert: &mut Assert) -> CheckResult {
        assert.is_true(3 > 2)?;
        assert.is_false(2 > 3)
    }

    fn test_null_check(&mut self, assert: &mut Assert) -> CheckResult {
        let missing: Option<&str> = None;
        assert.is_null(missing)?;
        assert.not_null(Some("Hello"))
    }
}

pub struct MyTest2;

impl TestUnit for MyTest2 {
    fn construct() -> Result<Self, FixtureError> {
        Ok(MyTest2)
    }
}

impl MyTest2 {
    /// Upper bound for the timed loop in `test_performance`.
    const PERFORMANCE_BUDGET_MS: f64 = 5_000.0;

    fn test_basic_assertions(&mut self, assert: &mut Assert) -> CheckResult {
        assert.equal(10, 5 + 5)?;
        assert.is_true(3 > 1)?;
        assert.is_false(2 > 3)
    }

    fn test_null_assertions(&mut self, assert: &mut Assert) -> CheckResult {
        assert.is_null::<&str>(None)?;
        assert.not_null(Some("Hello"))
    }

    /// Handles its own division fault, so only the follow-up check decides the outcome.
    fn test_exception(&mut self, assert: &mut Assert) -> CheckResult {
        let divisor = std::hint::black_box(0_i32);
        match panic::catch_unwind(|| 10 / divisor) {
            Ok(_) => assert.is_true(false),
            Err(_) => assert.is_true(true),
        }
    }

    fn test_performance(&mut self, assert: &mut Assert) -> CheckResult {
        let start = Instant::now();
        let result: f64 = (0..1_000_000u32).map(|i| f64::from(i).sqrt()).sum();
        let duration_ms = start.elapsed().as_secs_f64() * 1_000.0;

        tracing::info!(duration_ms, "test_performance finished the timed loop");
        assert.less_than(duration_ms, Self::PERFORMANCE_BUDGET_MS)?;
        assert.greater_than(result, 0)
    }

    fn test_boundary_values(&mut self, assert: &mut Assert) -> CheckResult {
        assert.equal(i32::MAX, 2_147_483_647)?;
        assert.equal(i32::MIN, -2_147_483_648)
    }
}
