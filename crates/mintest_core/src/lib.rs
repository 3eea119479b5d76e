#![forbid(unsafe_code)]
//! Provide shared, pure vocabulary and policy helpers for the mintest framework.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces that both the assertion library
//! (`mintest_assert`) and the runner (`mintest`) must agree on:
//! - naming conventions (the `test` method prefix, the default namespace),
//! - the marker registry (the out-of-band "this is a test" declaration),
//! - the numeric widening policy used by ordered comparisons,
//! - canonical user-facing message text (check failures and report lines).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no runner types.

pub mod conventions;
pub mod markers;
pub mod messages;
pub mod numeric;

pub use numeric::Numeric;
