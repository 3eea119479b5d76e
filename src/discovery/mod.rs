//! Test unit discovery.
//!
//! Discovery turns a logical namespace into the test units declared under it and, per unit, the declared
//! methods that qualify as tests. The enumeration capability itself sits behind the [`TestDiscovery`] trait so
//! the runner never cares where declarations come from; [`Registry`] is the default, table-driven source.
//!
//! ## Ordering
//!
//! Methods keep their declaration order. Units come back in whatever order the source enumerates them;
//! callers must not rely on cross-unit order being stable between runs.

mod registry;

use std::fmt;
use std::rc::Rc;

use miette::Diagnostic;
use mintest_assert::Assert;
use mintest_core::conventions;
use mintest_core::markers::{self, MarkerId};
use thiserror::Error;

use crate::engine::Fault;

pub use registry::{FixtureError, MethodBody, Registry, TestUnit, UnitBuilder};

/// Errors that end a run before any test method executes.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DiscoveryError {
    #[error("Unable to resolve test namespace: {namespace}")]
    #[diagnostic(
        code(mintest::discovery::unresolved_namespace),
        help("register at least one unit, or the namespace itself, before running it")
    )]
    UnresolvedNamespace { namespace: String },
}

/// Enumerate declared test units.
///
/// Implement this trait to plug in a different declaration source (generated tables, plugins, fakes).
pub trait TestDiscovery {
    /// Return the units declared under `namespace`, with methods already filtered to test methods.
    fn units(&self, namespace: &str) -> Result<Vec<UnitDescriptor>, DiscoveryError>;
}

/// Type-erased entry point of one declared method: builds a fresh fixture and runs the body on it.
pub(crate) type Invoker = Rc<dyn Fn(&mut Assert) -> Result<(), Fault>>;

/// One method declared on a unit, test or not.
#[derive(Clone)]
pub struct DeclaredMethod {
    name: String,
    marker: Option<MarkerId>,
    invoker: Invoker,
}

impl DeclaredMethod {
    pub(crate) fn new(name: impl Into<String>, marker: Option<MarkerId>, invoker: Invoker) -> Self {
        Self {
            name: name.into(),
            marker,
            invoker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }

    /// A method is a test if it carries a marker or its name has the test prefix.
    pub fn is_test(&self) -> bool {
        self.marker.is_some() || conventions::is_test_name(&self.name)
    }

    /// Construct a fresh fixture and run this method on it, capturing every fault.
    pub fn invoke(&self, assert: &mut Assert) -> Result<(), Fault> {
        (self.invoker)(assert)
    }
}

impl fmt::Debug for DeclaredMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredMethod")
            .field("name", &self.name)
            .field("marker", &self.marker.map(markers::as_str))
            .finish_non_exhaustive()
    }
}

/// A discovered test unit and its methods in declaration order.
#[derive(Debug, Clone)]
pub struct UnitDescriptor {
    namespace: String,
    name: String,
    methods: Vec<DeclaredMethod>,
}

impl UnitDescriptor {
    pub(crate) fn new(namespace: impl Into<String>, name: impl Into<String>, methods: Vec<DeclaredMethod>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            methods,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace-qualified name, as printed in unit summaries.
    pub fn qualified_name(&self) -> String {
        conventions::qualified_unit_name(&self.namespace, &self.name)
    }

    pub fn methods(&self) -> &[DeclaredMethod] {
        &self.methods
    }

    /// Keep only the methods that qualify as tests, preserving order.
    pub(crate) fn into_test_methods(mut self) -> Self {
        self.methods.retain(DeclaredMethod::is_test);
        self
    }
}
