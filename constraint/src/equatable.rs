//! Equality for Rust types that declare their comparison statically.
//!
//! Implementing [`Equatable`] is the compile-time counterpart of registering
//! an `equals` method: signature, parameter type and return type are checked
//! by the compiler, so the only possible failure is a `false` verdict.

use crate::{EqualityConstraint, EqualityFailure, Outcome};
use std::any::type_name;
use verity_core::CallResult;

/// Domain equality between `Self` and `Rhs`.
pub trait Equatable<Rhs: ?Sized = Self> {
    /// Returns true if `self` and `other` are equal in the domain's sense.
    fn equals(&self, other: &Rhs) -> bool;
}

/// Asserts that a value equals the expected one according to
/// [`Equatable::equals`].
#[derive(Debug, Clone)]
pub struct EquatableEquals<E> {
    expected: E,
}

impl<E> EquatableEquals<E> {
    pub fn new(expected: E) -> Self {
        Self { expected }
    }

    /// The expected value.
    pub fn expected(&self) -> &E {
        &self.expected
    }
}

impl<E, A> EqualityConstraint<A> for EquatableEquals<E>
where
    A: Equatable<E> + ?Sized,
{
    fn description(&self) -> String {
        "two objects are equal".to_string()
    }

    fn outcome(&self, actual: &A) -> CallResult<Outcome> {
        if actual.equals(&self.expected) {
            Ok(Outcome::Satisfied)
        } else {
            Ok(Outcome::Failed(EqualityFailure::values_not_equal(
                type_name::<A>(),
                "equals",
            )))
        }
    }
}
