//! Case definition and builder.
//!
//! A case names an expected fixture, an actual value, the evaluation mode
//! and what the evaluation must produce.

use tracing::debug;
use verity_constraint::{EqualityConstraint, ObjectEquals};
use verity_core::Value;
use verity_registry::Registry;

use crate::error::{HarnessError, HarnessResult};
use crate::expectation::{Expectation, ExpectationBuilder};
use crate::fixtures::value_object;

/// Actual value of a case, resolved against the registry when run.
#[derive(Debug, Clone)]
enum Actual {
    Fixture { short: String, value: i64 },
    Value(Value),
}

/// A single constraint evaluation with its expectation.
#[derive(Debug)]
pub struct Case {
    /// Case name (for reporting).
    name: String,
    /// Expected fixture short name and value.
    expected: Option<(String, i64)>,
    /// Actual value.
    actual: Option<Actual>,
    /// Comparison method name, if not the default.
    method: Option<String>,
    /// Caller description passed to evaluate.
    description: String,
    /// Whether to evaluate in return-result mode.
    return_result: bool,
    /// What the evaluation must produce.
    expectation: Expectation,
}

impl Case {
    /// Create a new case with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: None,
            actual: None,
            method: None,
            description: String::new(),
            return_result: false,
            expectation: Expectation::default(),
        }
    }

    /// Set the expected fixture.
    pub fn expected(mut self, short: impl Into<String>, value: i64) -> Self {
        self.expected = Some((short.into(), value));
        self
    }

    /// Set the actual value to a fixture instance.
    pub fn actual(mut self, short: impl Into<String>, value: i64) -> Self {
        self.actual = Some(Actual::Fixture {
            short: short.into(),
            value,
        });
        self
    }

    /// Set the actual value to an arbitrary value.
    pub fn actual_value(mut self, value: impl Into<Value>) -> Self {
        self.actual = Some(Actual::Value(value.into()));
        self
    }

    /// Compare with a differently named method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the caller description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Evaluate in return-result mode.
    pub fn return_result(mut self) -> Self {
        self.return_result = true;
        self
    }

    /// Set the expectation.
    pub fn expect<F>(mut self, expectation_fn: F) -> Self
    where
        F: FnOnce(ExpectationBuilder) -> ExpectationBuilder,
    {
        self.expectation = expectation_fn(ExpectationBuilder::new()).build();
        self
    }

    /// Get the case name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the constraint for this case.
    pub fn constraint<'r>(&self, registry: &'r Registry) -> HarnessResult<ObjectEquals<'r>> {
        let (short, value) = self
            .expected
            .as_ref()
            .ok_or_else(|| HarnessError::missing_expected(&self.name))?;
        let constraint = ObjectEquals::new(registry, value_object(registry, short, *value)?);
        Ok(match &self.method {
            Some(method) => constraint.with_method(method.clone()),
            None => constraint,
        })
    }

    /// Resolve the actual value for this case.
    pub fn actual_value_in(&self, registry: &Registry) -> HarnessResult<Value> {
        match &self.actual {
            Some(Actual::Fixture { short, value }) => {
                Ok(Value::Object(value_object(registry, short, *value)?))
            }
            Some(Actual::Value(value)) => Ok(value.clone()),
            None => Err(HarnessError::missing_actual(&self.name)),
        }
    }

    /// Run the case against a registry.
    pub fn run(&self, registry: &Registry) -> HarnessResult<()> {
        let constraint = self.constraint(registry)?;
        let actual = self.actual_value_in(registry)?;

        debug!(case = %self.name, return_result = self.return_result, "evaluating case");
        let result = constraint.evaluate(&actual, &self.description, self.return_result);

        self.expectation.verify(&self.name, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_case_builder() {
        let case = Case::new("equal")
            .expected("ValueObject", 1)
            .actual("ValueObject", 1)
            .expect(|e| e.passes());

        assert_eq!(case.name(), "equal");
        assert!(case.run(&fixtures::registry().unwrap()).is_ok());
    }

    #[test]
    fn test_case_without_actual() {
        let case = Case::new("incomplete").expected("ValueObject", 1);

        let err = case.run(&fixtures::registry().unwrap()).unwrap_err();

        assert!(matches!(err, HarnessError::MissingActual { .. }));
    }

    #[test]
    fn test_case_reports_wrong_outcome() {
        let case = Case::new("wrong")
            .expected("ValueObject", 1)
            .actual("ValueObject", 2)
            .expect(|e| e.passes());

        let err = case.run(&fixtures::registry().unwrap()).unwrap_err();

        assert!(matches!(err, HarnessError::ExpectationFailed { .. }));
    }
}
