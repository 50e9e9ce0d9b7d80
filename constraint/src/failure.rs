//! Equality failure reasons and evaluation outcomes.

use thiserror::Error;

/// Why an equality check failed.
///
/// `Display` renders the reason line that follows the
/// "Failed asserting that ..." header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EqualityFailure {
    /// The actual value is a scalar, a list or null.
    #[error("Actual value is not an object.")]
    NotAnObject,

    /// The actual type has no instance method with the comparison name.
    #[error("{type_name}::{method}() does not exist.")]
    MissingMethod { type_name: String, method: String },

    /// The method's return type is absent, nullable, a union or not bool.
    #[error("{type_name}::{method}() does not declare a bool return type.")]
    InvalidReturnType { type_name: String, method: String },

    /// The method takes zero or more than one parameter.
    #[error("{type_name}::{method}() does not accept exactly one argument.")]
    InvalidArgumentCount { type_name: String, method: String },

    /// The single parameter has no declared type, or a union type.
    #[error("Parameter of {type_name}::{method}() does not have a declared type.")]
    UndeclaredParameterType { type_name: String, method: String },

    /// The expected object cannot be passed as the parameter.
    #[error("{expected_type} is not an accepted argument type for {type_name}::{method}().")]
    IncompatibleParameterType {
        expected_type: String,
        type_name: String,
        method: String,
    },

    /// The method ran and answered `false`.
    #[error("The objects are not equal according to {type_name}::{method}().")]
    ValuesNotEqual { type_name: String, method: String },
}

impl EqualityFailure {
    pub fn missing_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MissingMethod {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn invalid_return_type(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::InvalidReturnType {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn invalid_argument_count(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::InvalidArgumentCount {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn undeclared_parameter_type(
        type_name: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self::UndeclaredParameterType {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn incompatible_parameter_type(
        expected_type: impl Into<String>,
        type_name: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self::IncompatibleParameterType {
            expected_type: expected_type.into(),
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn values_not_equal(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::ValuesNotEqual {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    /// Check if the failure is about the method's shape rather than its verdict.
    pub fn is_signature_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidReturnType { .. }
                | Self::InvalidArgumentCount { .. }
                | Self::UndeclaredParameterType { .. }
                | Self::IncompatibleParameterType { .. }
        )
    }
}

/// Result of judging one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The subject meets the expectation.
    Satisfied,
    /// The subject does not meet the expectation.
    Failed(EqualityFailure),
}

impl Outcome {
    /// Returns true if the subject met the expectation.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Outcome::Satisfied)
    }

    /// Get the failure reason, if any.
    pub fn failure(&self) -> Option<&EqualityFailure> {
        match self {
            Outcome::Satisfied => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }

    /// Consume into a `Result`.
    pub fn into_result(self) -> Result<(), EqualityFailure> {
        match self {
            Outcome::Satisfied => Ok(()),
            Outcome::Failed(failure) => Err(failure),
        }
    }
}

impl From<Result<(), EqualityFailure>> for Outcome {
    fn from(result: Result<(), EqualityFailure>) -> Self {
        match result {
            Ok(()) => Outcome::Satisfied,
            Err(failure) => Outcome::Failed(failure),
        }
    }
}
