//! Registration table for test units.
//!
//! There is no runtime reflection to scan for tests, so every unit declares itself: at program start a
//! registration call lists the unit's methods (name + function) through a [`UnitBuilder`]. Discovery then reads
//! this table instead of scanning anything.
//!
//! ```rust
//! use mintest::discovery::{FixtureError, Registry, TestDiscovery, TestUnit};
//! use mintest_assert::{Assert, CheckResult};
//!
//! struct Arithmetic;
//!
//! impl TestUnit for Arithmetic {
//!     fn construct() -> Result<Self, FixtureError> {
//!         Ok(Arithmetic)
//!     }
//! }
//!
//! impl Arithmetic {
//!     fn test_addition(&mut self, assert: &mut Assert) -> CheckResult {
//!         assert.equal(4, 2 + 2)
//!     }
//!
//!     fn doubles(&mut self, assert: &mut Assert) -> CheckResult {
//!         assert.equal(8, 4 * 2)
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .unit::<Arithmetic>("tests", "Arithmetic")
//!     .method("test_addition", Arithmetic::test_addition)
//!     .marked("doubles", Arithmetic::doubles)
//!     .register();
//!
//! let units = registry.units("tests").unwrap();
//! assert_eq!(units[0].methods().len(), 2);
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use mintest_assert::{Assert, CheckResult};
use mintest_core::markers::MarkerId;
use thiserror::Error;

use super::{DeclaredMethod, DiscoveryError, Invoker, TestDiscovery, UnitDescriptor};
use crate::engine;

/// A test unit type: anything with a zero-argument construction path.
///
/// `construct` runs once per test method, immediately before the method, so no state leaks between methods.
pub trait TestUnit: Sized + 'static {
    fn construct() -> Result<Self, FixtureError>;
}

/// A fixture could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Signature of a method declared on unit `T`.
pub type MethodBody<T> = fn(&mut T, &mut Assert) -> CheckResult;

/// Table of declared units, keyed by namespace.
#[derive(Debug, Default)]
pub struct Registry {
    namespaces: HashMap<String, Vec<UnitDescriptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a namespace so that discovering it succeeds even before any unit registers.
    pub fn namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.namespaces.entry(namespace.into()).or_default();
        self
    }

    /// Start declaring unit `T` as `name` under `namespace`.
    pub fn unit<T: TestUnit>(&mut self, namespace: impl Into<String>, name: impl Into<String>) -> UnitBuilder<'_, T> {
        UnitBuilder {
            registry: self,
            namespace: namespace.into(),
            name: name.into(),
            methods: Vec::new(),
            _unit: PhantomData,
        }
    }

    /// Number of units declared under `namespace` (zero when unknown).
    pub fn unit_count(&self, namespace: &str) -> usize {
        self.namespaces.get(namespace).map_or(0, Vec::len)
    }

    /// Add a unit, replacing an earlier declaration with the same name in the same namespace.
    fn insert(&mut self, unit: UnitDescriptor) {
        let units = self.namespaces.entry(unit.namespace().to_string()).or_default();
        match units.iter_mut().find(|existing| existing.name() == unit.name()) {
            Some(existing) => {
                tracing::debug!(unit = %unit.qualified_name(), "replacing earlier unit declaration");
                *existing = unit;
            }
            None => units.push(unit),
        }
    }
}

impl TestDiscovery for Registry {
    #[tracing::instrument(skip(self))]
    fn units(&self, namespace: &str) -> Result<Vec<UnitDescriptor>, DiscoveryError> {
        let units = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| DiscoveryError::UnresolvedNamespace {
                namespace: namespace.to_string(),
            })?;

        let units: Vec<UnitDescriptor> = units.iter().cloned().map(UnitDescriptor::into_test_methods).collect();
        tracing::debug!(unit_count = units.len(), "discovered units");
        Ok(units)
    }
}

/// Builder returned by [`Registry::unit`]; collects declared methods in order.
#[must_use = "call `register` to add the unit to the registry"]
pub struct UnitBuilder<'r, T: TestUnit> {
    registry: &'r mut Registry,
    namespace: String,
    name: String,
    methods: Vec<DeclaredMethod>,
    _unit: PhantomData<fn() -> T>,
}

impl<T: TestUnit> UnitBuilder<'_, T> {
    /// Declare a method. It runs as a test only if its name starts with `test`.
    pub fn method(self, name: impl Into<String>, body: MethodBody<T>) -> Self {
        self.declare(name, None, body)
    }

    /// Declare a method carrying the explicit test marker, whatever its name.
    pub fn marked(self, name: impl Into<String>, body: MethodBody<T>) -> Self {
        self.declare(name, Some(MarkerId::Test), body)
    }

    /// Finish the declaration and add the unit to the registry.
    pub fn register(self) {
        let unit = UnitDescriptor::new(self.namespace, self.name, self.methods);
        self.registry.insert(unit);
    }

    fn declare(mut self, name: impl Into<String>, marker: Option<MarkerId>, body: MethodBody<T>) -> Self {
        let invoker: Invoker = Rc::new(move |assert: &mut Assert| engine::invoke::<T>(body, assert));
        self.methods.push(DeclaredMethod::new(name, marker, invoker));
        self
    }
}
