//! Shared framework conventions (well-known identifiers).

/// Method names starting with this prefix are test methods without needing a marker.
pub const TEST_METHOD_PREFIX: &str = "test";

/// Namespace discovered when the runner is started without arguments.
pub const DEFAULT_NAMESPACE: &str = "tests";

/// Separator between a namespace and a unit name in qualified unit names.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Check whether a declared method name follows the test naming convention.
///
/// ## Examples
/// ```rust
/// use mintest_core::conventions::is_test_name;
///
/// assert!(is_test_name("test_addition"));
/// assert!(is_test_name("testAddition"));
/// assert!(!is_test_name("helper"));
/// ```
pub fn is_test_name(name: &str) -> bool {
    name.starts_with(TEST_METHOD_PREFIX)
}

/// Join a namespace and a unit name into the name shown in unit summaries.
///
/// An empty namespace yields the bare unit name.
pub fn qualified_unit_name(namespace: &str, unit: &str) -> String {
    if namespace.is_empty() {
        unit.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{unit}")
    }
}
