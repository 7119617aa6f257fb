//! Test utilities crate
//!
//! Shared test infrastructure for the marketplace test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built test data for common entities
//! - `builders`: builder patterns for test data construction
//! - `assertions`: assertion helpers for the domain error taxonomy

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
