//! Object instances.
//!
//! An object is an instance of a registry type: the type it was built from
//! plus its field values. Objects never carry behaviour; methods are looked
//! up in the registry through `type_id`.

use crate::{Fields, TypeId, Value};
use std::fmt;

/// An instance of a registry type.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Type of this object (reference to registry).
    pub type_id: TypeId,
    /// Field values.
    pub fields: Fields,
}

impl Object {
    /// Create a new object with the given fields.
    pub fn new(type_id: TypeId, fields: Fields) -> Self {
        Self { type_id, fields }
    }

    /// Get a field value by name, or `Null` when absent.
    pub fn field_or_null(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&Value::Null)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_id)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}
