//! Population engine for the dummy-objects framework.
//!
//! This crate provides the [`Populator`] which fills instances of registered
//! types with random values, recursing into nested composites, enumerations
//! and collections. Types come either from a [`TypeRegistry`] (built in code
//! or loaded from YAML) or from typed Rust declarations made with
//! [`dummy_object!`] and [`dummy_enum!`].
//!
//! # Architecture
//!
//! ```text
//! TypeRegistry (YAML / typed declarations)
//!        │
//!        ▼
//! ┌──────────────────┐     ┌────────────┐
//! │    Populator     │────▶│ classifier │  TypeRef → FieldShape
//! │                  │     └────────────┘
//! │  - registry      │     ┌────────────┐
//! │  - rng           │────▶│ generators │  FieldShape → DummyValue
//! │  - max_depth     │     └────────────┘
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Population { instance, unhandled }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dummy_generator::{Populator, TypeRegistry};
//!
//! let registry = TypeRegistry::from_yaml(r#"
//! version: 1
//! seed: 42
//! types:
//!   - name: Phone
//!     fields:
//!       - name: number
//!         type: String
//!       - name: area
//!         type: int
//! "#).unwrap();
//!
//! let mut populator = Populator::seeded(registry, 42);
//! let phone = populator.populate("Phone").unwrap();
//! assert_eq!(phone.get("number").unwrap().as_str().unwrap().len(), 10);
//! ```
//!
//! # Value kinds
//!
//! - `int` / `Integer` - integer in [1, 10)
//! - `long` / `Long` - integer in [100, 1000)
//! - `float` / `Float` - float in [10, 100)
//! - `double` / `Double` - float in [1, 10)
//! - `boolean` / `Boolean` - fair coin flip
//! - `String` - 10 characters from `ABCDEFHIJKLMNOPQRSTUVWXYZ -`
//! - `BigDecimal` - whole number in [10, 100)
//! - `Date`, `Instant`, `Timestamp`, `LocalDate`, `LocalDateTime`, `LocalTime` - now
//! - enumerations - one declared constant
//! - collections - exactly [`COLLECTION_SIZE`] elements

pub mod classifier;
pub mod error;
pub mod generators;
mod macros;
pub mod populator;
pub mod typed;

// Re-exports for convenience
pub use classifier::classify;
pub use dummy_core::{
    DummyObject, DummyValue, EnumDescriptor, FieldDescriptor, FieldShape, TypeDescriptor, TypeRef,
    TypeRegistry,
};
pub use error::PopulateError;
pub use populator::{
    InstanceIterator, Population, Populator, PopulatorConfig, UnhandledField, UnhandledReason,
    COLLECTION_SIZE, DEFAULT_MAX_DEPTH,
};
pub use typed::{Dummy, DummyEnum, DummyField, FieldSetter};

/// Create a populated instance of a typed declaration using the
/// thread-local random source.
pub fn create<T: Dummy>() -> Result<T, PopulateError> {
    Populator::default().create()
}

/// Create `count` independent populated instances of a typed declaration.
pub fn create_many<T: Dummy>(count: usize) -> Result<Vec<T>, PopulateError> {
    Populator::default().create_many(count)
}
