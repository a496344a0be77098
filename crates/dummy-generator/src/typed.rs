//! Typed Rust declarations.
//!
//! Rust has no runtime reflection, so every populatable type carries an
//! explicit descriptor table: its declared field types plus one setter per
//! field. The [`dummy_object!`](crate::dummy_object) and
//! [`dummy_enum!`](crate::dummy_enum) macros generate these tables.
//!
//! | Rust type | Declared type |
//! |---|---|
//! | `i32`, `i64`, `f32`, `f64`, `bool` | `i32`, `i64`, `f32`, `f64`, `bool` (primitive) |
//! | `i16`, `i8`, `char` | `i16`, `i8`, `char` (primitive, no generator) |
//! | `Option<i32>` etc. | `Integer`, `Long`, `Float`, `Double`, `Boolean`, ... |
//! | `String` | `String` |
//! | `rust_decimal::Decimal` | `BigDecimal` |
//! | `DateTime<Utc>` | `Instant` |
//! | `NaiveDate`, `NaiveDateTime`, `NaiveTime` | `LocalDate`, `LocalDateTime`, `LocalTime` |
//! | `Vec<T>` | `List` of `T` |

use crate::error::PopulateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use dummy_core::{
    DummyObject, DummyValue, EnumDescriptor, FieldDescriptor, PrimitiveKind, ScalarKind,
    TypeDescriptor, TypeRef, TypeRegistry,
};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

/// Setter writing a generated value into one field.
pub type Setter<T> = fn(&mut T, DummyValue) -> Result<(), PopulateError>;

/// Entry of a type's descriptor table.
pub struct FieldSetter<T> {
    /// Field name
    pub name: &'static str,
    /// Declared field type
    pub ty: TypeRef,
    /// Writes a generated value into the field
    pub set: Setter<T>,
}

/// A Rust type that can appear as a field of a populated type.
pub trait DummyField: Sized {
    /// Declared type of a field of this Rust type.
    fn type_ref() -> TypeRef;

    /// Declared type when wrapped in `Option`.
    fn boxed_type_ref() -> TypeRef {
        Self::type_ref()
    }

    /// Register this type and every type it reaches.
    fn register(_registry: &mut TypeRegistry) -> Result<(), PopulateError> {
        Ok(())
    }

    /// Convert a generated value into this Rust type.
    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError>;
}

/// A composite Rust type the engine can populate.
pub trait Dummy: DummyField {
    /// Name the type is registered under
    const TYPE_NAME: &'static str;

    /// No-argument constructor.
    fn construct() -> Result<Self, String>;

    /// Descriptor table, in declaration order.
    fn fields() -> Vec<FieldSetter<Self>>;

    /// Type descriptor derived from the descriptor table.
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new(
            Self::TYPE_NAME,
            Self::fields()
                .into_iter()
                .map(|f| FieldDescriptor::new(f.name, f.ty))
                .collect(),
        )
    }

    /// Write a generated value into the named field.
    fn assign(&mut self, field: &str, value: DummyValue) -> Result<(), PopulateError> {
        let setter = Self::fields()
            .into_iter()
            .find(|f| f.name == field)
            .ok_or_else(|| PopulateError::FieldAccess {
                type_name: Self::TYPE_NAME.to_string(),
                field: field.to_string(),
                reason: "no such field".to_string(),
            })?;
        (setter.set)(self, value)
    }

    /// Construct an instance and write every field of a populated object.
    fn from_object(object: DummyObject) -> Result<Self, PopulateError> {
        let mut instance = Self::construct().map_err(|reason| PopulateError::Construction {
            type_name: Self::TYPE_NAME.to_string(),
            reason,
        })?;
        for (name, value) in object.into_fields() {
            instance.assign(&name, value)?;
        }
        Ok(instance)
    }
}

/// A unit-variant Rust enum the engine can pick constants from.
pub trait DummyEnum: DummyField {
    /// Name the enum is registered under
    const TYPE_NAME: &'static str;

    /// Constant names, in declaration order
    const CONSTANTS: &'static [&'static str];

    /// Resolve a variant from its constant name.
    fn from_constant(constant: &str) -> Option<Self>;

    /// Enum descriptor derived from the constants.
    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::new(Self::TYPE_NAME, Self::CONSTANTS.iter().copied())
    }
}

/// Register a composite's descriptor.
///
/// Returns `true` if the type was newly registered, in which case the caller
/// registers the types its fields reach. Registering first stops
/// self-referential types from recursing.
///
/// Fails with [`PopulateError::TypeResolution`] when the name is a primitive
/// or scalar name (fields of that name would never reach the composite), or
/// when a different type is already registered under the name.
pub fn begin_registration<T: Dummy>(registry: &mut TypeRegistry) -> Result<bool, PopulateError> {
    if PrimitiveKind::from_type_name(T::TYPE_NAME).is_some()
        || ScalarKind::from_type_name(T::TYPE_NAME).is_some()
    {
        return Err(PopulateError::type_resolution(
            T::TYPE_NAME,
            "name is reserved for a primitive or scalar kind",
        ));
    }

    let descriptor = T::descriptor();
    if registry.contains(T::TYPE_NAME) {
        return match registry.get_type(T::TYPE_NAME) {
            Some(existing) if *existing == descriptor => Ok(false),
            _ => Err(PopulateError::type_resolution(
                T::TYPE_NAME,
                "conflicts with a registered type of the same name",
            )),
        };
    }

    registry
        .register_type(descriptor)
        .map_err(|e| PopulateError::type_resolution(T::TYPE_NAME, e.to_string()))?;
    Ok(true)
}

/// Register an enum's descriptor.
///
/// Fails with [`PopulateError::TypeResolution`] when a different type is
/// already registered under the name.
pub fn register_enum<E: DummyEnum>(registry: &mut TypeRegistry) -> Result<(), PopulateError> {
    let descriptor = E::descriptor();
    if registry.contains(E::TYPE_NAME) {
        return match registry.get_enum(E::TYPE_NAME) {
            Some(existing) if existing.constants == descriptor.constants => Ok(()),
            _ => Err(PopulateError::type_resolution(
                E::TYPE_NAME,
                "conflicts with a registered type of the same name",
            )),
        };
    }

    registry
        .register_enum(descriptor)
        .map_err(|e| PopulateError::type_resolution(E::TYPE_NAME, e.to_string()))
}

/// Convert a generated value into a composite Rust type.
pub fn composite_from_value<T: Dummy>(value: DummyValue) -> Result<T, PopulateError> {
    match value {
        DummyValue::Object(object) => T::from_object(object),
        // Substitute left by the recursion guard
        DummyValue::Null => T::construct().map_err(|reason| PopulateError::Construction {
            type_name: T::TYPE_NAME.to_string(),
            reason,
        }),
        other => Err(PopulateError::mismatch(T::TYPE_NAME, &other)),
    }
}

/// Convert a generated value into an enum variant.
pub fn enum_from_value<E: DummyEnum>(value: DummyValue) -> Result<E, PopulateError> {
    match value {
        DummyValue::Enum { constant, .. } => {
            E::from_constant(&constant).ok_or_else(|| PopulateError::ValueMismatch {
                expected: E::TYPE_NAME.to_string(),
                found: format!("constant {constant}"),
            })
        }
        other => Err(PopulateError::mismatch(E::TYPE_NAME, &other)),
    }
}

/// Select one variant of a typed enum uniformly at random.
pub fn random_variant<E: DummyEnum, R: Rng>(rng: &mut R) -> Result<E, PopulateError> {
    let constant = E::CONSTANTS
        .choose(rng)
        .ok_or_else(|| PopulateError::EmptyEnum(E::TYPE_NAME.to_string()))?;
    E::from_constant(constant).ok_or_else(|| PopulateError::NotAnEnum(E::TYPE_NAME.to_string()))
}

macro_rules! impl_primitive_field {
    ($ty:ty, $name:literal, $boxed:literal, $variant:ident) => {
        impl DummyField for $ty {
            fn type_ref() -> TypeRef {
                TypeRef::named($name)
            }

            fn boxed_type_ref() -> TypeRef {
                TypeRef::named($boxed)
            }

            fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
                match value {
                    DummyValue::$variant(v) => Ok(v),
                    DummyValue::Null => Ok(<$ty>::default()),
                    other => Err(PopulateError::mismatch($name, &other)),
                }
            }
        }
    };
}

impl_primitive_field!(i32, "i32", "Integer", Int32);
impl_primitive_field!(i64, "i64", "Long", Int64);
impl_primitive_field!(f32, "f32", "Float", Float32);
impl_primitive_field!(f64, "f64", "Double", Float64);
impl_primitive_field!(bool, "bool", "Boolean", Bool);

// Recognized kinds without a generator: only ever receive `Null`
macro_rules! impl_ungenerated_field {
    ($ty:ty, $name:literal, $boxed:literal) => {
        impl DummyField for $ty {
            fn type_ref() -> TypeRef {
                TypeRef::named($name)
            }

            fn boxed_type_ref() -> TypeRef {
                TypeRef::named($boxed)
            }

            fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
                match value {
                    DummyValue::Null => Ok(<$ty>::default()),
                    other => Err(PopulateError::mismatch($name, &other)),
                }
            }
        }
    };
}

impl_ungenerated_field!(i16, "i16", "Short");
impl_ungenerated_field!(i8, "i8", "Byte");
impl_ungenerated_field!(char, "char", "Character");

impl DummyField for String {
    fn type_ref() -> TypeRef {
        TypeRef::named("String")
    }

    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
        match value {
            DummyValue::String(s) => Ok(s),
            DummyValue::Null => Ok(String::new()),
            other => Err(PopulateError::mismatch("string", &other)),
        }
    }
}

macro_rules! impl_scalar_field {
    ($ty:ty, $name:literal, $variant:ident) => {
        impl DummyField for $ty {
            fn type_ref() -> TypeRef {
                TypeRef::named($name)
            }

            fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
                match value {
                    DummyValue::$variant(v) => Ok(v),
                    other => Err(PopulateError::mismatch($name, &other)),
                }
            }
        }
    };
}

impl_scalar_field!(Decimal, "BigDecimal", Decimal);
impl_scalar_field!(DateTime<Utc>, "Instant", DateTime);
impl_scalar_field!(NaiveDate, "LocalDate", LocalDate);
impl_scalar_field!(NaiveDateTime, "LocalDateTime", LocalDateTime);
impl_scalar_field!(NaiveTime, "LocalTime", LocalTime);

impl<T: DummyField> DummyField for Option<T> {
    fn type_ref() -> TypeRef {
        T::boxed_type_ref()
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), PopulateError> {
        T::register(registry)
    }

    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
        match value {
            DummyValue::Null => Ok(None),
            other => T::from_dummy_value(other).map(Some),
        }
    }
}

impl<T: DummyField> DummyField for Box<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }

    fn boxed_type_ref() -> TypeRef {
        T::boxed_type_ref()
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), PopulateError> {
        T::register(registry)
    }

    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
        T::from_dummy_value(value).map(Box::new)
    }
}

impl<T: DummyField> DummyField for Vec<T> {
    fn type_ref() -> TypeRef {
        TypeRef::list(T::type_ref())
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), PopulateError> {
        T::register(registry)
    }

    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
        match value {
            DummyValue::List(items) => items.into_iter().map(T::from_dummy_value).collect(),
            // Substitute left by the recursion guard
            DummyValue::Null => Ok(Vec::new()),
            other => Err(PopulateError::mismatch("list", &other)),
        }
    }
}
