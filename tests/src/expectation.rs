//! Expectations and builders for verifying evaluation results.

use verity_constraint::{ConstraintError, ConstraintResult};

use crate::error::{HarnessError, HarnessResult};

/// Header line of every object-equality failure.
pub const FAILURE_HEADER: &str = "Failed asserting that two objects are equal.";

/// What an evaluation is expected to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expectation {
    /// `Ok(true)`.
    #[default]
    Passes,
    /// `Ok(false)` (return-result mode).
    Rejected,
    /// An expectation failure with exactly this message.
    FailsWith(String),
    /// An expectation failure whose message matches this regex.
    FailsMatching(String),
    /// A runtime error from the comparison method.
    CallError,
}

impl Expectation {
    /// Verify the expectation against a result.
    pub fn verify(&self, case: &str, result: &ConstraintResult<bool>) -> HarnessResult<()> {
        match (self, result) {
            (Expectation::Passes, Ok(true)) => Ok(()),
            (Expectation::Rejected, Ok(false)) => Ok(()),
            (Expectation::FailsWith(expected), Err(ConstraintError::ExpectationFailed(e))) => {
                if e.message() == expected {
                    Ok(())
                } else {
                    Err(HarnessError::expectation_failed(
                        case,
                        format!(
                            "failure message mismatch:\n  expected: {:?}\n  actual:   {:?}",
                            expected,
                            e.message()
                        ),
                    ))
                }
            }
            (Expectation::FailsMatching(pattern), Err(ConstraintError::ExpectationFailed(e))) => {
                let re = regex_lite::Regex::new(pattern).map_err(|err| {
                    HarnessError::expectation_failed(
                        case,
                        format!("invalid regex pattern: {}", err),
                    )
                })?;
                if re.is_match(e.message()) {
                    Ok(())
                } else {
                    Err(HarnessError::expectation_failed(
                        case,
                        format!(
                            "expected failure matching '{}', got: {:?}",
                            pattern,
                            e.message()
                        ),
                    ))
                }
            }
            (Expectation::CallError, Err(ConstraintError::Call(_))) => Ok(()),
            (expected, actual) => Err(HarnessError::expectation_failed(
                case,
                format!("expected {:?}, got {}", expected, describe(actual)),
            )),
        }
    }
}

fn describe(result: &ConstraintResult<bool>) -> String {
    match result {
        Ok(b) => format!("Ok({})", b),
        Err(e) => format!("error: {:?}", e.to_string()),
    }
}

/// Builder for fluent expectation construction.
#[derive(Debug, Default)]
pub struct ExpectationBuilder {
    expectation: Expectation,
}

impl ExpectationBuilder {
    /// Create a new builder expecting success.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the expectation.
    pub fn build(self) -> Expectation {
        self.expectation
    }

    /// Expect `Ok(true)`.
    pub fn passes(mut self) -> Self {
        self.expectation = Expectation::Passes;
        self
    }

    /// Expect `Ok(false)`.
    pub fn rejected(mut self) -> Self {
        self.expectation = Expectation::Rejected;
        self
    }

    /// Expect a failure whose reason line is `reason`, below the standard header.
    pub fn fails_with(mut self, reason: impl AsRef<str>) -> Self {
        let message = format!("{}\n{}", FAILURE_HEADER, reason.as_ref());
        self.expectation = Expectation::FailsWith(message);
        self
    }

    /// Expect a failure with exactly this full message.
    pub fn fails_with_message(mut self, message: impl Into<String>) -> Self {
        self.expectation = Expectation::FailsWith(message.into());
        self
    }

    /// Expect a failure whose full message matches the regex.
    pub fn fails_matching(mut self, pattern: impl Into<String>) -> Self {
        self.expectation = Expectation::FailsMatching(pattern.into());
        self
    }

    /// Expect the comparison method itself to error.
    pub fn call_error(mut self) -> Self {
        self.expectation = Expectation::CallError;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_constraint::{EqualityFailure, ExpectationFailed};

    fn failure(message: &str) -> ConstraintResult<bool> {
        Err(ExpectationFailed::new(message, EqualityFailure::NotAnObject).into())
    }

    #[test]
    fn test_passes() {
        let expectation = ExpectationBuilder::new().passes().build();

        assert!(expectation.verify("ok", &Ok(true)).is_ok());
        assert!(expectation.verify("ok", &Ok(false)).is_err());
    }

    #[test]
    fn test_fails_with_prefixes_header() {
        let expectation = ExpectationBuilder::new().fails_with("reason").build();

        assert_eq!(
            expectation,
            Expectation::FailsWith(format!("{}\nreason", FAILURE_HEADER))
        );
        assert!(expectation
            .verify("fail", &failure(&format!("{}\nreason", FAILURE_HEADER)))
            .is_ok());
        assert!(expectation.verify("fail", &failure("other")).is_err());
    }

    #[test]
    fn test_fails_matching() {
        let expectation = ExpectationBuilder::new().fails_matching(r"not an object\.$").build();

        assert!(expectation
            .verify("fail", &failure("x\nActual value is not an object."))
            .is_ok());
        assert!(expectation.verify("fail", &Ok(true)).is_err());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let expectation = ExpectationBuilder::new().fails_matching("(").build();

        let err = expectation.verify("bad", &failure("x")).unwrap_err();

        assert!(err.to_string().contains("invalid regex pattern"));
    }
}
