//! Declared types and field classifications for the dummy-objects framework.
//!
//! This module defines `TypeRef`, the declared type of a field, and
//! `FieldShape`, the classification the population engine dispatches on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declared type of a field.
///
/// A `TypeRef` carries the type name and, for parameterized types such as
/// collections, the explicit type argument. The argument is never recovered
/// from a textual signature.
///
/// # YAML Format
///
/// Plain types are specified as strings:
/// ```yaml
/// type: String
/// type: Phone
/// ```
///
/// Parameterized types use object format:
/// ```yaml
/// type:
///   name: List
///   of: Phone
/// type:
///   name: List
///   of:
///     name: List
///     of: int
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Declared type name
    pub name: String,
    /// Generic type argument, if any
    pub argument: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Create a plain (non-parameterized) type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    /// Create a parameterized type reference.
    pub fn generic(name: impl Into<String>, argument: TypeRef) -> Self {
        Self {
            name: name.into(),
            argument: Some(Box::new(argument)),
        }
    }

    /// Create a `List` of the given element type.
    pub fn list(element: TypeRef) -> Self {
        Self::generic("List", element)
    }

    /// Get the type argument, if any.
    pub fn argument(&self) -> Option<&TypeRef> {
        self.argument.as_deref()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{}<{}>", self.name, argument),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

// Custom serialization/deserialization for TypeRef
// Supports both simple string format ("Phone") and object format ({"name": "List", "of": "Phone"})

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match &self.argument {
            None => serializer.serialize_str(&self.name),
            Some(argument) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", &self.name)?;
                map.serialize_entry("of", argument)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct TypeRefVisitor;

        impl<'de> Visitor<'de> for TypeRefVisitor {
            type Value = TypeRef;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a type name or a map with `name` and optional `of`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if value.trim().is_empty() {
                    return Err(E::custom("type name must not be empty"));
                }
                Ok(TypeRef::named(value))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut argument: Option<TypeRef> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "of" => argument = Some(map.next_value()?),
                        other => {
                            return Err(M::Error::unknown_field(other, &["name", "of"]));
                        }
                    }
                }

                let name = name.ok_or_else(|| M::Error::missing_field("name"))?;
                Ok(TypeRef {
                    name,
                    argument: argument.map(Box::new),
                })
            }
        }

        deserializer.deserialize_any(TypeRefVisitor)
    }
}

/// Native unboxed primitive kinds.
///
/// Primitive names are matched case-sensitively, so `long` is a primitive
/// while `Long` is a boxed scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 32-bit signed integer (`int`, `i32`)
    Int32,
    /// 64-bit signed integer (`long`, `i64`)
    Int64,
    /// 32-bit float (`float`, `f32`)
    Float32,
    /// 64-bit float (`double`, `f64`)
    Float64,
    /// Boolean (`boolean`, `bool`)
    Bool,
    /// 16-bit signed integer (`short`, `i16`), no generator
    Int16,
    /// 8-bit signed integer (`byte`, `i8`), no generator
    Int8,
    /// Character (`char`), no generator
    Char,
}

impl PrimitiveKind {
    /// Resolve a primitive kind from its exact type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "int" | "i32" => Some(Self::Int32),
            "long" | "i64" => Some(Self::Int64),
            "float" | "f32" => Some(Self::Float32),
            "double" | "f64" => Some(Self::Float64),
            "boolean" | "bool" => Some(Self::Bool),
            "short" | "i16" => Some(Self::Int16),
            "byte" | "i8" => Some(Self::Int8),
            "char" => Some(Self::Char),
            _ => None,
        }
    }

    /// Canonical type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Bool => "boolean",
            Self::Int16 => "short",
            Self::Int8 => "byte",
            Self::Char => "char",
        }
    }
}

/// Recognized boxed/standard scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Decimal,
    Date,
    Instant,
    Timestamp,
    LocalDate,
    LocalDateTime,
    LocalTime,
    /// Recognized, no generator
    Short,
    /// Recognized, no generator
    Byte,
    /// Recognized, no generator
    Character,
}

impl ScalarKind {
    /// Resolve a scalar kind from a type's simple name (case-insensitive).
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "boolean" => Some(Self::Boolean),
            "bigdecimal" | "decimal" => Some(Self::Decimal),
            "date" => Some(Self::Date),
            "instant" => Some(Self::Instant),
            "timestamp" => Some(Self::Timestamp),
            "localdate" => Some(Self::LocalDate),
            "localdatetime" => Some(Self::LocalDateTime),
            "localtime" => Some(Self::LocalTime),
            "short" => Some(Self::Short),
            "byte" => Some(Self::Byte),
            "character" => Some(Self::Character),
            _ => None,
        }
    }

    /// Canonical type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Decimal => "BigDecimal",
            Self::Date => "Date",
            Self::Instant => "Instant",
            Self::Timestamp => "Timestamp",
            Self::LocalDate => "LocalDate",
            Self::LocalDateTime => "LocalDateTime",
            Self::LocalTime => "LocalTime",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::Character => "Character",
        }
    }
}

/// Collection type names (case-insensitive).
const COLLECTION_NAMES: &[&str] = &[
    "list",
    "arraylist",
    "linkedlist",
    "vec",
    "vecdeque",
    "collection",
    "set",
    "hashset",
    "btreeset",
];

/// Check if a type name denotes a homogeneous collection.
pub fn is_collection_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    COLLECTION_NAMES.contains(&lower.as_str())
}

/// Classification of a declared field type.
///
/// Derived per field by the classifier; never stored in a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    /// Native unboxed primitive
    Primitive(PrimitiveKind),
    /// Recognized boxed/standard scalar, including date/time kinds
    BoxedScalar(ScalarKind),
    /// Enumeration type, by name
    Enumeration(String),
    /// Homogeneous collection with its element type
    Collection(TypeRef),
    /// Nested composite type, by name
    Composite(String),
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "primitive({})", kind.type_name()),
            Self::BoxedScalar(kind) => write!(f, "scalar({})", kind.type_name()),
            Self::Enumeration(name) => write!(f, "enum({name})"),
            Self::Collection(element) => write!(f, "collection({element})"),
            Self::Composite(name) => write!(f, "composite({name})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_are_case_sensitive() {
        assert_eq!(PrimitiveKind::from_type_name("int"), Some(PrimitiveKind::Int32));
        assert_eq!(PrimitiveKind::from_type_name("i64"), Some(PrimitiveKind::Int64));
        assert_eq!(PrimitiveKind::from_type_name("Long"), None);
        assert_eq!(PrimitiveKind::from_type_name("String"), None);
    }

    #[test]
    fn test_scalar_names_are_case_insensitive() {
        assert_eq!(ScalarKind::from_type_name("String"), Some(ScalarKind::String));
        assert_eq!(ScalarKind::from_type_name("STRING"), Some(ScalarKind::String));
        assert_eq!(
            ScalarKind::from_type_name("LocalDateTime"),
            Some(ScalarKind::LocalDateTime)
        );
        assert_eq!(ScalarKind::from_type_name("BigDecimal"), Some(ScalarKind::Decimal));
        assert_eq!(ScalarKind::from_type_name("Phone"), None);
    }

    #[test]
    fn test_collection_names() {
        assert!(is_collection_name("List"));
        assert!(is_collection_name("Vec"));
        assert!(is_collection_name("HashSet"));
        assert!(!is_collection_name("Map"));
        assert!(!is_collection_name("Phone"));
    }

    #[test]
    fn test_deserialize_simple_string() {
        let parsed: TypeRef = serde_yaml::from_str("Phone").unwrap();
        assert_eq!(parsed, TypeRef::named("Phone"));
    }

    #[test]
    fn test_deserialize_parameterized() {
        let yaml = r#"
name: List
of:
  name: List
  of: int
"#;
        let parsed: TypeRef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, TypeRef::list(TypeRef::list(TypeRef::named("int"))));
        assert_eq!(parsed.to_string(), "List<List<int>>");
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let yaml = r#"
name: List
element: Phone
"#;
        assert!(serde_yaml::from_str::<TypeRef>(yaml).is_err());
    }

    #[test]
    fn test_field_shape_display() {
        assert_eq!(
            FieldShape::Collection(TypeRef::named("Phone")).to_string(),
            "collection(Phone)"
        );
        assert_eq!(
            FieldShape::Primitive(PrimitiveKind::Int64).to_string(),
            "primitive(long)"
        );
    }
}
