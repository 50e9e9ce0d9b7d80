//! Verity Registry
//!
//! Runtime type lookup. Single source of truth for object types, their
//! fields, their methods and the declared signatures of those methods.
//! The registry is immutable after construction via RegistryBuilder.

mod builder;
mod registry;
mod types;

pub use builder::{RegistryBuilder, RegistryError, TypeBuilder};
pub use registry::{Registry, ResolvedMethod};
pub use types::*;
