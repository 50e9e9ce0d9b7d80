//! The constraint abstraction shared by every equality check.

use crate::{ConstraintResult, EqualityFailure, ExpectationFailed, Outcome};
use verity_core::CallResult;

/// An equality check over subjects of type `S`.
///
/// Implementors decide whether the subject equals their expected value and
/// explain a mismatch with an [`EqualityFailure`]. The provided `evaluate`
/// turns a failed outcome into either `Ok(false)` or an `ExpectationFailed`
/// error.
pub trait EqualityConstraint<S: ?Sized> {
    /// What the constraint asserts, e.g. "two objects are equal".
    fn description(&self) -> String;

    /// Judge a subject.
    ///
    /// Returns `Err` only when the check itself could not run to completion.
    fn outcome(&self, subject: &S) -> CallResult<Outcome>;

    /// Number of assertions this constraint counts as.
    fn count(&self) -> usize {
        1
    }

    /// Render the failure message for a reason.
    ///
    /// A non-empty `description` is placed on its own line before the header.
    fn failure_message(&self, failure: &EqualityFailure, description: &str) -> String {
        let message = format!("Failed asserting that {}.\n{}", self.description(), failure);
        if description.is_empty() {
            message
        } else {
            format!("{}\n{}", description, message)
        }
    }

    /// Evaluate a subject.
    ///
    /// With `return_result` set, a failed check yields `Ok(false)`; use
    /// [`EqualityConstraint::outcome`] when the reason is needed in that mode.
    /// Otherwise a failed check yields `ConstraintError::ExpectationFailed`.
    fn evaluate(
        &self,
        subject: &S,
        description: &str,
        return_result: bool,
    ) -> ConstraintResult<bool> {
        match self.outcome(subject)? {
            Outcome::Satisfied => Ok(true),
            Outcome::Failed(_) if return_result => Ok(false),
            Outcome::Failed(failure) => {
                let message = self.failure_message(&failure, description);
                Err(ExpectationFailed::new(message, failure).into())
            }
        }
    }
}
