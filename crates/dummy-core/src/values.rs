//! Value representations for the dummy-objects framework.
//!
//! This module defines the values produced by the population engine before
//! they are materialized into typed Rust values or converted to JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

/// Generated value.
///
/// `DummyValue` is the type-agnostic value written into a field of a
/// [`DummyObject`]. `Null` is the language-default value every field holds
/// before the engine writes it.
#[derive(Debug, Clone, PartialEq)]
pub enum DummyValue {
    /// Default value (field not written)
    Null,

    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// Exact decimal
    Decimal(Decimal),

    /// Point in time (date, instant and timestamp kinds)
    DateTime(DateTime<Utc>),

    /// Local calendar date
    LocalDate(NaiveDate),

    /// Local date and time
    LocalDateTime(NaiveDateTime),

    /// Local time of day
    LocalTime(NaiveTime),

    /// Enumeration constant
    Enum {
        /// Enumeration type name
        type_name: String,
        /// Selected constant
        constant: String,
    },

    /// Homogeneous list of values
    List(Vec<DummyValue>),

    /// Nested composite instance
    Object(DummyObject),
}

impl DummyValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value's variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::String(_) => "string",
            Self::Decimal(_) => "decimal",
            Self::DateTime(_) => "datetime",
            Self::LocalDate(_) => "local_date",
            Self::LocalDateTime(_) => "local_datetime",
            Self::LocalTime(_) => "local_time",
            Self::Enum { .. } => "enum",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as an f32.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float32(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Float32(f) => Some(*f as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an enumeration constant.
    pub fn as_enum_constant(&self) -> Option<&str> {
        match self {
            Self::Enum { constant, .. } => Some(constant),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[DummyValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a nested object.
    pub fn as_object(&self) -> Option<&DummyObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Instance of a composite type.
///
/// Fields keep their declaration order. An instance starts with every
/// field set to [`DummyValue::Null`] and is filled in place by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyObject {
    type_name: String,
    fields: Vec<(String, DummyValue)>,
}

impl DummyObject {
    /// Create a default instance with the given field names, all `Null`.
    pub fn with_fields<I, S>(type_name: impl Into<String>, field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            fields: field_names
                .into_iter()
                .map(|name| (name.into(), DummyValue::Null))
                .collect(),
        }
    }

    /// Get the type name of this instance.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&DummyValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a mutable field value by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DummyValue> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Write a declared field. Returns `false` if the field is not declared.
    pub fn set(&mut self, name: &str, value: DummyValue) -> bool {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &DummyValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the instance, returning its fields in declaration order.
    pub fn into_fields(self) -> Vec<(String, DummyValue)> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance_is_null() {
        let obj = DummyObject::with_fields("Phone", ["number", "kind"]);
        assert_eq!(obj.type_name(), "Phone");
        assert_eq!(obj.len(), 2);
        assert!(obj.fields().all(|(_, v)| v.is_null()));
    }

    #[test]
    fn test_set_keeps_declaration_order() {
        let mut obj = DummyObject::with_fields("Phone", ["number", "kind"]);
        assert!(obj.set("kind", DummyValue::String("HOME".to_string())));
        assert!(obj.set("number", DummyValue::Int32(7)));
        assert!(!obj.set("missing", DummyValue::Null));

        let names: Vec<&str> = obj.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["number", "kind"]);
        assert_eq!(obj.get("number").and_then(|v| v.as_i32()), Some(7));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(DummyValue::Int32(3).as_i64(), Some(3));
        assert_eq!(DummyValue::Float32(1.5).as_f64(), Some(1.5));
        assert_eq!(DummyValue::Bool(true).as_i32(), None);
        let value = DummyValue::Enum {
            type_name: "Kind".to_string(),
            constant: "HOME".to_string(),
        };
        assert_eq!(value.as_enum_constant(), Some("HOME"));
        assert_eq!(value.kind_name(), "enum");
    }
}
