//! Common error types for Verity.

use thiserror::Error;

/// Errors that can occur while calling a method on an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The receiver's type has no instance method with that name.
    #[error("Call to undefined method {type_name}::{method}()")]
    UndefinedMethod { type_name: String, method: String },

    /// Wrong number of arguments.
    #[error("{type_name}::{method}() expects exactly {expected} argument(s), {given} given")]
    ArgumentCount {
        type_name: String,
        method: String,
        expected: usize,
        given: usize,
    },

    /// An argument does not satisfy its declared parameter type.
    #[error("{type_name}::{method}(): Argument #{position} (${param}) must be of type {expected}, {given} given")]
    ArgumentType {
        type_name: String,
        method: String,
        position: usize,
        param: String,
        expected: String,
        given: String,
    },

    /// The returned value does not satisfy the declared return type.
    #[error("{type_name}::{method}(): Return value must be of type {expected}, {given} returned")]
    ReturnType {
        type_name: String,
        method: String,
        expected: String,
        given: String,
    },
}

impl CallError {
    pub fn undefined_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UndefinedMethod {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn argument_count(
        type_name: impl Into<String>,
        method: impl Into<String>,
        expected: usize,
        given: usize,
    ) -> Self {
        Self::ArgumentCount {
            type_name: type_name.into(),
            method: method.into(),
            expected,
            given,
        }
    }

    pub fn argument_type(
        type_name: impl Into<String>,
        method: impl Into<String>,
        position: usize,
        param: impl Into<String>,
        expected: impl Into<String>,
        given: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            type_name: type_name.into(),
            method: method.into(),
            position,
            param: param.into(),
            expected: expected.into(),
            given: given.into(),
        }
    }

    pub fn return_type(
        type_name: impl Into<String>,
        method: impl Into<String>,
        expected: impl Into<String>,
        given: impl Into<String>,
    ) -> Self {
        Self::ReturnType {
            type_name: type_name.into(),
            method: method.into(),
            expected: expected.into(),
            given: given.into(),
        }
    }
}

/// Result type for method calls.
pub type CallResult<T> = Result<T, CallError>;
