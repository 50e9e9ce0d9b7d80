//! RegistryBuilder for constructing an immutable Registry.

use crate::{MethodDef, ParamDef, Registry, SubtypeIndex, TypeDef, TypeExpr};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use verity_core::{Object, TypeId, Value};

/// Errors that can occur during registry construction or instantiation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Unknown parent type: {0}")]
    UnknownParentType(String),

    #[error("Duplicate method {method} on type {type_name}")]
    DuplicateMethod { type_name: String, method: String },

    #[error("Duplicate parameter ${param} in {type_name}::{method}()")]
    DuplicateParam {
        type_name: String,
        method: String,
        param: String,
    },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Cannot instantiate abstract type {0}")]
    AbstractType(String),

    #[error("Unknown field {field} on type {type_name}")]
    UnknownField { type_name: String, field: String },
}

impl MethodDef {
    /// Start a method definition with the given body.
    ///
    /// The method has no parameters and no declared return type until
    /// they are added.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            is_static: false,
            body: Arc::new(body),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// Declare the return type.
    pub fn returns(mut self, type_expr: TypeExpr) -> Self {
        self.return_type = Some(type_expr);
        self
    }

    /// Mark as static.
    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Types being built.
    types: HashMap<TypeId, TypeDef>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type definition.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeBuilder {
            builder: self,
            id,
            name,
            parent_names: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            is_abstract: false,
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let subtype_index = SubtypeIndex::build(&self.types);
        debug!(types = self.types.len(), "registry built");
        Ok(Registry::new(self.types, self.type_names, subtype_index))
    }
}

/// Builder for a type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: TypeId,
    name: String,
    parent_names: Vec<String>,
    fields: Vec<String>,
    methods: Vec<MethodDef>,
    is_abstract: bool,
}

impl<'a> TypeBuilder<'a> {
    /// Add a parent type by name.
    pub fn extends(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_names.push(parent_name.into());
        self
    }

    /// Declare a field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.fields.contains(&name) {
            self.fields.push(name);
        }
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Mark as abstract.
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, RegistryError> {
        if self.builder.type_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        let mut parent_ids = Vec::new();
        for parent_name in &self.parent_names {
            match self.builder.type_names.get(parent_name) {
                Some(&parent_id) => parent_ids.push(parent_id),
                None => return Err(RegistryError::UnknownParentType(parent_name.clone())),
            }
        }

        let mut methods = HashMap::new();
        for method in self.methods {
            let mut seen = HashSet::new();
            for param in &method.params {
                if !seen.insert(param.name.as_str()) {
                    return Err(RegistryError::DuplicateParam {
                        type_name: self.name,
                        method: method.name.clone(),
                        param: param.name.clone(),
                    });
                }
            }
            if methods.contains_key(&method.name) {
                return Err(RegistryError::DuplicateMethod {
                    type_name: self.name,
                    method: method.name,
                });
            }
            methods.insert(method.name.clone(), method);
        }

        debug!(
            type_name = %self.name,
            parents = parent_ids.len(),
            methods = methods.len(),
            "registered type"
        );

        let type_def = TypeDef {
            id: self.id,
            name: self.name.clone(),
            parent_ids,
            fields: self.fields,
            methods,
            is_abstract: self.is_abstract,
        };

        self.builder.type_names.insert(self.name, self.id);
        self.builder.types.insert(self.id, type_def);

        Ok(self.id)
    }
}
