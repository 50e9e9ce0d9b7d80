//! Type and method definition types.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use verity_core::{Object, TypeId, Value};

/// A declared type in a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Bool,
    Int,
    Float,
    String,
    Array,
    /// Only valid as a return type; the method returns nothing.
    Void,
    /// Accepts any value.
    Mixed,
    /// Accepts any object.
    Object,
    /// The type declaring the method.
    SelfType,
    /// A registry type by name (resolved when checked).
    Class(String),
    /// `?T`: null or the inner type.
    Nullable(Box<TypeExpr>),
    /// `A|B`: any of the members.
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Shorthand for a registry type reference.
    pub fn class(name: impl Into<String>) -> Self {
        TypeExpr::Class(name.into())
    }

    /// Shorthand for `?inner`.
    pub fn nullable(inner: TypeExpr) -> Self {
        TypeExpr::Nullable(Box::new(inner))
    }

    /// Shorthand for `a|b|...`.
    pub fn union(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::Union(members.into_iter().collect())
    }

    /// Returns true for a single named type (nullable or not), false for unions.
    pub fn is_named(&self) -> bool {
        match self {
            TypeExpr::Union(_) => false,
            TypeExpr::Nullable(inner) => inner.is_named(),
            _ => true,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Bool => write!(f, "bool"),
            TypeExpr::Int => write!(f, "int"),
            TypeExpr::Float => write!(f, "float"),
            TypeExpr::String => write!(f, "string"),
            TypeExpr::Array => write!(f, "array"),
            TypeExpr::Void => write!(f, "void"),
            TypeExpr::Mixed => write!(f, "mixed"),
            TypeExpr::Object => write!(f, "object"),
            TypeExpr::SelfType => write!(f, "self"),
            TypeExpr::Class(name) => write!(f, "{}", name),
            TypeExpr::Nullable(inner) => write!(f, "?{}", inner),
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
        }
    }
}

/// Method parameter definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    /// Parameter name.
    pub name: String,
    /// Declared type, if any.
    pub type_expr: Option<TypeExpr>,
}

impl ParamDef {
    /// A parameter without a declared type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: None,
        }
    }

    /// A parameter with a declared type.
    pub fn typed(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr: Some(type_expr),
        }
    }
}

/// Native implementation of a method: receiver and arguments in, value out.
pub type MethodBody = Arc<dyn Fn(&Object, &[Value]) -> Value + Send + Sync>;

/// Method definition within a type.
#[derive(Clone)]
pub struct MethodDef {
    /// Method name.
    pub name: String,
    /// Ordered parameters.
    pub params: Vec<ParamDef>,
    /// Declared return type, if any.
    pub return_type: Option<TypeExpr>,
    /// Whether this is a static (non-instance) method.
    pub is_static: bool,
    /// Implementation.
    pub body: MethodBody,
}

impl MethodDef {
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("return_type", &self.return_type)
            .field("is_static", &self.is_static)
            .field("body", &"<fn>")
            .finish()
    }
}

/// Object type definition.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Unique identifier.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Parent type IDs (for inheritance).
    pub parent_ids: Vec<TypeId>,
    /// Declared field names.
    pub fields: Vec<String>,
    /// Methods declared on this type (not inherited ones).
    pub methods: HashMap<String, MethodDef>,
    /// Whether this type is abstract (cannot be instantiated directly).
    pub is_abstract: bool,
}

impl TypeDef {
    pub fn new(id: TypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_ids: Vec::new(),
            fields: Vec::new(),
            methods: HashMap::new(),
            is_abstract: false,
        }
    }

    /// Get a declared method by name.
    pub fn get_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.get(name)
    }

    /// Check if this type declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

/// Precomputed ancestor sets for subtype checks.
#[derive(Debug, Clone, Default)]
pub struct SubtypeIndex {
    /// For each type, the set of all its supertypes (transitive).
    supertypes: HashMap<TypeId, HashSet<TypeId>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the subtype index from type definitions.
    pub fn build(types: &HashMap<TypeId, TypeDef>) -> Self {
        let mut index = Self::new();

        // Direct parents first
        for (type_id, type_def) in types {
            index
                .supertypes
                .insert(*type_id, type_def.parent_ids.iter().copied().collect());
        }

        // Transitive closure; iterate until no changes
        let type_ids: Vec<TypeId> = types.keys().copied().collect();
        let mut changed = true;
        while changed {
            changed = false;
            for &type_id in &type_ids {
                let supertypes: Vec<TypeId> = index
                    .supertypes
                    .get(&type_id)
                    .map(|s| s.iter().copied().collect())
                    .unwrap_or_default();

                for super_id in supertypes {
                    let transitive: Vec<TypeId> = index
                        .supertypes
                        .get(&super_id)
                        .map(|s| s.iter().copied().collect())
                        .unwrap_or_default();

                    if let Some(set) = index.supertypes.get_mut(&type_id) {
                        for trans_id in transitive {
                            if set.insert(trans_id) {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }

        index
    }

    /// Check if `sub` is a subtype of `super_type`.
    pub fn is_subtype(&self, sub: TypeId, super_type: TypeId) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(&sub)
            .map(|set| set.contains(&super_type))
            .unwrap_or(false)
    }
}
