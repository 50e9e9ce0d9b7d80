//! Assertion helpers.
//!
//! Each helper evaluates a constraint in throwing mode and discards the
//! boolean, so callers can use `?` in tests.

use crate::{ConstraintResult, EqualityConstraint, Equatable, EquatableEquals, ObjectEquals};
use verity_core::{Object, Value};
use verity_registry::Registry;

/// Assert that `subject` meets `constraint`.
pub fn assert_that<S, C>(subject: &S, constraint: &C, message: &str) -> ConstraintResult<()>
where
    S: ?Sized,
    C: EqualityConstraint<S> + ?Sized,
{
    constraint.evaluate(subject, message, false).map(|_| ())
}

/// Assert that `actual` equals `expected` according to the actual type's
/// `equals` method.
pub fn assert_object_equals(
    registry: &Registry,
    expected: Object,
    actual: &Value,
    message: &str,
) -> ConstraintResult<()> {
    assert_that(actual, &ObjectEquals::new(registry, expected), message)
}

/// Assert that `actual` equals `expected` according to [`Equatable`].
pub fn assert_equatable<E, A>(expected: E, actual: &A, message: &str) -> ConstraintResult<()>
where
    A: Equatable<E> + ?Sized,
{
    assert_that(actual, &EquatableEquals::new(expected), message)
}
