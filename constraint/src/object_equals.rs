//! Equality through a type's own comparison method.

use crate::{EqualityConstraint, EqualityFailure, Outcome};
use verity_core::{CallResult, Object, Value};
use verity_registry::{Registry, ResolvedMethod, TypeExpr};

/// Name of the comparison method unless configured otherwise.
pub const DEFAULT_METHOD: &str = "equals";

/// Asserts that an actual object equals the expected one according to the
/// actual type's comparison method.
///
/// Before the method is trusted it must be an instance method declaring a
/// `bool` return type and exactly one parameter with a single named type
/// that accepts the expected object. The method descriptor is looked up
/// again on every evaluation.
#[derive(Debug, Clone)]
pub struct ObjectEquals<'r> {
    registry: &'r Registry,
    expected: Object,
    method: String,
}

impl<'r> ObjectEquals<'r> {
    /// Create a constraint comparing against `expected` with `equals`.
    pub fn new(registry: &'r Registry, expected: Object) -> Self {
        Self {
            registry,
            expected,
            method: DEFAULT_METHOD.to_string(),
        }
    }

    /// Use a different comparison method name.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// The expected object.
    pub fn expected(&self) -> &Object {
        &self.expected
    }

    /// The comparison method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Find the comparison method and check its signature.
    fn resolve<'a>(
        &'a self,
        actual: &'a Value,
    ) -> Result<(&'a Object, ResolvedMethod<'r>), EqualityFailure> {
        let object = actual.as_object().ok_or(EqualityFailure::NotAnObject)?;
        let type_name = self.registry.type_name(object.type_id);

        let resolved = self
            .registry
            .find_instance_method(object.type_id, &self.method)
            .ok_or_else(|| EqualityFailure::missing_method(&type_name, &self.method))?;
        let def = resolved.def;

        if def.return_type != Some(TypeExpr::Bool) {
            return Err(EqualityFailure::invalid_return_type(&type_name, &self.method));
        }

        if def.arity() != 1 {
            return Err(EqualityFailure::invalid_argument_count(&type_name, &self.method));
        }

        let param_type = match def.params.first().and_then(|p| p.type_expr.as_ref()) {
            Some(type_expr) if type_expr.is_named() => type_expr,
            _ => {
                return Err(EqualityFailure::undeclared_parameter_type(
                    &type_name,
                    &self.method,
                ))
            }
        };

        if !self
            .registry
            .object_satisfies(&self.expected, param_type, resolved.declaring_type)
        {
            return Err(EqualityFailure::incompatible_parameter_type(
                self.registry.type_name(self.expected.type_id),
                &type_name,
                &self.method,
            ));
        }

        Ok((object, resolved))
    }
}

impl EqualityConstraint<Value> for ObjectEquals<'_> {
    fn description(&self) -> String {
        "two objects are equal".to_string()
    }

    fn outcome(&self, actual: &Value) -> CallResult<Outcome> {
        let (object, resolved) = match self.resolve(actual) {
            Ok(found) => found,
            Err(failure) => return Ok(Outcome::Failed(failure)),
        };

        let argument = Value::Object(self.expected.clone());
        let verdict = self
            .registry
            .call(object, resolved, std::slice::from_ref(&argument))?;

        if verdict.as_bool() == Some(true) {
            Ok(Outcome::Satisfied)
        } else {
            Ok(Outcome::Failed(EqualityFailure::values_not_equal(
                self.registry.type_name(object.type_id),
                &self.method,
            )))
        }
    }
}
