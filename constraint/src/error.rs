//! Constraint error types.

use crate::EqualityFailure;
use thiserror::Error;
use verity_core::CallError;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// An expectation did not hold.
///
/// The message is the full rendered failure: an optional caller description
/// line, the "Failed asserting that ..." header, then the reason line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExpectationFailed {
    message: String,
    reason: EqualityFailure,
}

impl ExpectationFailed {
    pub fn new(message: impl Into<String>, reason: EqualityFailure) -> Self {
        Self {
            message: message.into(),
            reason,
        }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The structured failure reason.
    pub fn reason(&self) -> &EqualityFailure {
        &self.reason
    }
}

/// Errors that can occur while evaluating a constraint.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// The subject did not meet the expectation.
    #[error(transparent)]
    ExpectationFailed(#[from] ExpectationFailed),

    /// The comparison method itself failed at runtime.
    #[error("Comparison method failed: {0}")]
    Call(#[from] CallError),
}

impl ConstraintError {
    /// Get the expectation failure, if this is one.
    pub fn as_expectation(&self) -> Option<&ExpectationFailed> {
        match self {
            Self::ExpectationFailed(e) => Some(e),
            Self::Call(_) => None,
        }
    }

    /// Check if this is an expectation failure.
    pub fn is_expectation_failure(&self) -> bool {
        self.as_expectation().is_some()
    }
}
