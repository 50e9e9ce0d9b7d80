//! Verity Constraint
//!
//! Judge values against expectations and explain mismatches.
//!
//! Responsibilities:
//! - Locate and validate a type's equality method before trusting it
//! - Invoke the equality method and report its verdict
//! - Offer the same assertion for Rust types implementing `Equatable`
//! - Render failures as "Failed asserting that ..." messages

mod assert;
mod constraint;
mod equatable;
mod error;
mod failure;
mod object_equals;

pub use assert::{assert_equatable, assert_object_equals, assert_that};
pub use constraint::EqualityConstraint;
pub use equatable::{Equatable, EquatableEquals};
pub use error::{ConstraintError, ConstraintResult, ExpectationFailed};
pub use failure::{EqualityFailure, Outcome};
pub use object_equals::{ObjectEquals, DEFAULT_METHOD};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        assert_equatable, assert_object_equals, assert_that, ConstraintError, ConstraintResult,
        EqualityConstraint, EqualityFailure, Equatable, EquatableEquals, ExpectationFailed,
        ObjectEquals, Outcome,
    };
}
