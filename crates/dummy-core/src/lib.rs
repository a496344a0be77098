//! Core types for the dummy-objects framework.
//!
//! This crate provides the foundational types used across the framework,
//! including:
//!
//! - [`TypeRef`] - Declared field type with an explicit generic argument
//! - [`FieldShape`] - Classification tag the population engine dispatches on
//! - [`DummyValue`] / [`DummyObject`] - Generated values and instances
//! - [`TypeRegistry`] - Type and enum descriptors, loaded from code or YAML
//!
//! # Architecture
//!
//! ```text
//! dummy-core (this crate)
//!    │
//!    ├─── dummy-generator  (classifier, value generators, population engine)
//!    │
//!    └─── dummy-json       (implements From for serde_json values)
//! ```
//!
//! # Example
//!
//! ```rust
//! use dummy_core::{FieldDescriptor, TypeDescriptor, TypeRef, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_type(TypeDescriptor::new(
//!         "Person",
//!         vec![
//!             FieldDescriptor::new("name", "String"),
//!             FieldDescriptor::new("tags", TypeRef::list(TypeRef::named("String"))),
//!         ],
//!     ))
//!     .unwrap();
//!
//! assert!(registry.get_type("Person").is_some());
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{EnumDescriptor, FieldDescriptor, SchemaError, TypeDescriptor, TypeRegistry};
pub use types::{is_collection_name, FieldShape, PrimitiveKind, ScalarKind, TypeRef};
pub use values::{DummyObject, DummyValue};
