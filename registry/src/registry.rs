//! The Registry - immutable type lookup and method dispatch.

use crate::{MethodDef, RegistryError, SubtypeIndex, TypeDef, TypeExpr};
use std::collections::HashMap;
use tracing::trace;
use verity_core::{CallError, CallResult, Fields, Object, TypeId, Value};

/// A method found on a type, together with the type that declares it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMethod<'r> {
    /// Type declaring the method (the receiver's type or one of its ancestors).
    pub declaring_type: TypeId,
    /// The method definition.
    pub def: &'r MethodDef,
}

/// The Registry provides runtime lookup of type definitions.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Type definitions by ID.
    types: HashMap<TypeId, TypeDef>,
    /// Type ID lookup by name.
    type_names: HashMap<String, TypeId>,
    /// Precomputed subtype relationships.
    subtype_index: SubtypeIndex,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        types: HashMap<TypeId, TypeDef>,
        type_names: HashMap<String, TypeId>,
        subtype_index: SubtypeIndex,
    ) -> Self {
        Self {
            types,
            type_names,
            subtype_index,
        }
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by name.
    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    /// Get a type definition by ID.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(&id)
    }

    /// Get the name of a type, or its raw ID when the type is unknown.
    pub fn type_name(&self, id: TypeId) -> String {
        self.get_type(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Describe a value for diagnostics: the type name for objects,
    /// the kind name otherwise.
    pub fn describe_value(&self, value: &Value) -> String {
        match value {
            Value::Object(object) => self.type_name(object.type_id),
            other => other.kind_name().to_string(),
        }
    }

    // ==================== Subtype Queries ====================

    /// Check if `sub` is a subtype of `super_type`.
    pub fn is_subtype(&self, sub: TypeId, super_type: TypeId) -> bool {
        self.subtype_index.is_subtype(sub, super_type)
    }

    // ==================== Method Lookups ====================

    /// Find a method by name on a type or its ancestors.
    ///
    /// The type's own methods win; parents are searched in declaration
    /// order, depth first.
    pub fn find_method(&self, type_id: TypeId, name: &str) -> Option<ResolvedMethod<'_>> {
        let type_def = self.types.get(&type_id)?;
        if let Some(def) = type_def.get_method(name) {
            return Some(ResolvedMethod {
                declaring_type: type_id,
                def,
            });
        }
        type_def
            .parent_ids
            .iter()
            .find_map(|&parent_id| self.find_method(parent_id, name))
    }

    /// Find a non-static method by name on a type or its ancestors.
    pub fn find_instance_method(
        &self,
        type_id: TypeId,
        name: &str,
    ) -> Option<ResolvedMethod<'_>> {
        self.find_method(type_id, name)
            .filter(|resolved| !resolved.def.is_static)
    }

    // ==================== Type Checks ====================

    /// Check whether a value satisfies a declared type.
    ///
    /// `self_type` is what `self` resolves to, normally the type
    /// declaring the method whose signature is being checked.
    pub fn satisfies(&self, value: &Value, type_expr: &TypeExpr, self_type: TypeId) -> bool {
        match (type_expr, value) {
            (TypeExpr::Mixed, _) => true,
            (TypeExpr::Nullable(_), Value::Null) => true,
            (TypeExpr::Nullable(inner), _) => self.satisfies(value, inner, self_type),
            (TypeExpr::Union(members), _) => {
                members.iter().any(|m| self.satisfies(value, m, self_type))
            }
            (TypeExpr::Void, Value::Null) => true,
            (TypeExpr::Bool, Value::Bool(_)) => true,
            (TypeExpr::Int, Value::Int(_)) => true,
            (TypeExpr::Float, Value::Float(_)) => true,
            (TypeExpr::String, Value::String(_)) => true,
            (TypeExpr::Array, Value::List(_)) => true,
            (_, Value::Object(object)) => self.object_satisfies(object, type_expr, self_type),
            _ => false,
        }
    }

    /// Check whether an object satisfies a declared type.
    pub fn object_satisfies(
        &self,
        object: &Object,
        type_expr: &TypeExpr,
        self_type: TypeId,
    ) -> bool {
        match type_expr {
            TypeExpr::Mixed | TypeExpr::Object => true,
            TypeExpr::SelfType => self.is_subtype(object.type_id, self_type),
            TypeExpr::Class(name) => match self.type_names.get(name) {
                Some(&class_id) => self.is_subtype(object.type_id, class_id),
                None => false,
            },
            TypeExpr::Nullable(inner) => self.object_satisfies(object, inner, self_type),
            TypeExpr::Union(members) => members
                .iter()
                .any(|m| self.object_satisfies(object, m, self_type)),
            _ => false,
        }
    }

    // ==================== Objects ====================

    /// Create an instance of a named type.
    ///
    /// Every field must be declared on the type or one of its ancestors.
    pub fn instantiate(&self, type_name: &str, fields: Fields) -> Result<Object, RegistryError> {
        let type_def = self
            .get_type_by_name(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))?;

        if type_def.is_abstract {
            return Err(RegistryError::AbstractType(type_name.to_string()));
        }

        if let Some(field) = fields.keys().find(|f| !self.type_has_field(type_def.id, f)) {
            return Err(RegistryError::UnknownField {
                type_name: type_name.to_string(),
                field: field.clone(),
            });
        }

        Ok(Object::new(type_def.id, fields))
    }

    /// Check if a type declares or inherits a field.
    pub fn type_has_field(&self, type_id: TypeId, field: &str) -> bool {
        match self.types.get(&type_id) {
            Some(type_def) => {
                type_def.has_field(field)
                    || type_def
                        .parent_ids
                        .iter()
                        .any(|&parent_id| self.type_has_field(parent_id, field))
            }
            None => false,
        }
    }

    /// Call an instance method on an object, looking it up by name.
    pub fn invoke(&self, receiver: &Object, method: &str, args: &[Value]) -> CallResult<Value> {
        let resolved = self
            .find_instance_method(receiver.type_id, method)
            .ok_or_else(|| CallError::undefined_method(self.type_name(receiver.type_id), method))?;
        self.call(receiver, resolved, args)
    }

    /// Call a method already resolved for the receiver's type.
    ///
    /// Arguments are checked against the declared parameter types before the
    /// body runs, and the returned value against the declared return type.
    pub fn call(
        &self,
        receiver: &Object,
        resolved: ResolvedMethod<'_>,
        args: &[Value],
    ) -> CallResult<Value> {
        let type_name = self.type_name(receiver.type_id);
        let def = resolved.def;
        let method = def.name.as_str();

        if args.len() != def.arity() {
            return Err(CallError::argument_count(
                &type_name,
                method,
                def.arity(),
                args.len(),
            ));
        }

        for (position, (param, arg)) in def.params.iter().zip(args).enumerate() {
            if let Some(type_expr) = &param.type_expr {
                if !self.satisfies(arg, type_expr, resolved.declaring_type) {
                    return Err(CallError::argument_type(
                        &type_name,
                        method,
                        position + 1,
                        &param.name,
                        type_expr.to_string(),
                        self.describe_value(arg),
                    ));
                }
            }
        }

        trace!(type_name = %type_name, method, args = args.len(), "invoke");
        let result = (def.body)(receiver, args);

        if let Some(return_type) = &def.return_type {
            if !self.satisfies(&result, return_type, resolved.declaring_type) {
                return Err(CallError::return_type(
                    &type_name,
                    method,
                    return_type.to_string(),
                    self.describe_value(&result),
                ));
            }
        }

        Ok(result)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            types: HashMap::new(),
            type_names: HashMap::new(),
            subtype_index: SubtypeIndex::new(),
        }
    }
}
