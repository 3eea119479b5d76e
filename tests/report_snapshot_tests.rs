//! Snapshot tests for console report output
//!
//! The line format is parsed by downstream tooling; any change here is a breaking change.
//!
//! Review changes: `cargo insta review`

use mintest::demo;
use mintest::{ConsoleReporter, Registry, RunConfig};

fn report_for(registry: &Registry, namespace: &str) -> String {
    let mut reporter = ConsoleReporter::new(Vec::new());
    let config = RunConfig {
        namespace: namespace.to_string(),
        ..RunConfig::default()
    };
    mintest::runner::run(registry, &mut reporter, &config);
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_my_test_report() {
    let mut registry = Registry::new();
    demo::register_my_test(&mut registry);

    insta::assert_snapshot!(report_for(&registry, "tests"), @r"
    PASS: test_addition
    FAIL: test_failure -> assertion failed: expected 5, but was 4
    PASS: test_boolean
    PASS: test_null_check
    Completed: tests::MyTest, passed: 3, failed: 1
    ");
}

#[test]
fn test_unresolved_namespace_report() {
    insta::assert_snapshot!(report_for(&demo::registry(), "missing"), @"Unable to resolve test namespace: missing");
}
