//! Property-based tests for run accounting
//!
//! Whatever mix of passing and failing methods a unit declares, every method yields exactly one outcome and
//! the class summary counts them.

use mintest::discovery::MethodBody;
use mintest::{Assert, CheckResult, ConsoleReporter, FixtureError, Registry, RunConfig, TestUnit};
use proptest::prelude::*;

struct Toggle;

impl TestUnit for Toggle {
    fn construct() -> Result<Self, FixtureError> {
        Ok(Toggle)
    }
}

fn passes(_: &mut Toggle, assert: &mut Assert) -> CheckResult {
    assert.is_true(true)
}

fn fails(_: &mut Toggle, assert: &mut Assert) -> CheckResult {
    assert.equal(1, 2)
}

proptest! {
    #[test]
    fn summary_counts_every_method_once(outcomes in prop::collection::vec(any::<bool>(), 0..24)) {
        let mut registry = Registry::new();
        let mut builder = registry.unit::<Toggle>("props", "Toggle");
        for (i, pass) in outcomes.iter().enumerate() {
            let body: MethodBody<Toggle> = if *pass { passes } else { fails };
            builder = builder.method(format!("test_{i}"), body);
        }
        builder.register();

        let mut reporter = ConsoleReporter::new(Vec::new());
        let config = RunConfig { namespace: "props".to_string(), ..RunConfig::default() };
        let summary = mintest::runner::run(&registry, &mut reporter, &config);

        let expected_passed = outcomes.iter().filter(|p| **p).count();
        prop_assert_eq!(summary.passed(), expected_passed);
        prop_assert_eq!(summary.failed(), outcomes.len() - expected_passed);
        prop_assert_eq!(summary.failure_log.len(), outcomes.len() - expected_passed);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        prop_assert_eq!(output.lines().count(), outcomes.len() + 1);
    }
}
