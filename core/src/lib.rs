//! Verity Core Types
//!
//! This crate provides the foundational types shared by every Verity crate:
//! - Type identifiers (TypeId)
//! - Value types (the Value enum with scalar, list and object values)
//! - Object instances of registry types
//! - Errors raised while calling methods on objects

mod error;
mod id;
mod object;
mod value;

pub use error::*;
pub use id::*;
pub use object::*;
pub use value::*;
