//! Type descriptors and the type registry.
//!
//! ## Type Hierarchy
//!
//! - `FieldDescriptor` - Single declared field (name, declared type)
//! - `TypeDescriptor` - Composite type with ordered fields
//! - `EnumDescriptor` - Enumeration type with ordered constants
//! - `TypeRegistry` - Collection of descriptors, looked up by name
//!
//! ## Usage
//!
//! Registries are built in code, registered from typed Rust declarations,
//! or loaded from YAML schema files:
//!
//! ```yaml
//! version: 1
//! types:
//!   - name: Person
//!     fields:
//!       - name: name
//!         type: String
//!       - name: phones
//!         type:
//!           name: List
//!           of: Phone
//! enums:
//!   - name: PhoneKind
//!     constants: [MOBILE, HOME, WORK]
//! ```

use crate::types::TypeRef;
use crate::values::DummyObject;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A type or enum name is declared twice
    #[error("Type '{0}' is declared more than once")]
    DuplicateType(String),

    /// A composite type declares the same field twice
    #[error("Field '{field}' is declared more than once in type '{type_name}'")]
    DuplicateField { type_name: String, field: String },

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(u32),
}

// ============================================================================
// Descriptors
// ============================================================================

/// Declared field of a composite type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Declared type, with its generic argument if any
    #[serde(rename = "type")]
    pub field_type: TypeRef,

    /// Whether the field refuses writes
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

impl FieldDescriptor {
    /// Create a new writable field descriptor.
    pub fn new(name: impl Into<String>, field_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            read_only: false,
        }
    }

    /// Create a new read-only field descriptor.
    pub fn read_only(name: impl Into<String>, field_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            read_only: true,
        }
    }
}

fn default_constructible() -> bool {
    true
}

/// Introspectable shape of a composite type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeDescriptor {
    /// Type name
    pub name: String,

    /// Declared fields, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Whether the type has a usable no-argument constructor
    #[serde(default = "default_constructible")]
    pub constructible: bool,
}

impl TypeDescriptor {
    /// Create a new constructible type descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            constructible: true,
        }
    }

    /// Mark the type as lacking a no-argument constructor.
    pub fn without_constructor(mut self) -> Self {
        self.constructible = false;
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Allocate a default instance with every field unset.
    ///
    /// Returns `None` if the type has no usable constructor.
    pub fn instantiate(&self) -> Option<DummyObject> {
        if !self.constructible {
            return None;
        }
        Some(DummyObject::with_fields(
            self.name.clone(),
            self.fields.iter().map(|f| f.name.clone()),
        ))
    }
}

/// Enumeration type with its fixed, ordered constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnumDescriptor {
    /// Enumeration name
    pub name: String,

    /// Constants, in declaration order
    pub constants: Vec<String>,
}

impl EnumDescriptor {
    /// Create a new enum descriptor.
    pub fn new<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the enumeration declares the given constant.
    pub fn contains(&self, constant: &str) -> bool {
        self.constants.iter().any(|c| c == constant)
    }
}

// ============================================================================
// Registry
// ============================================================================

fn default_version() -> u32 {
    1
}

/// Registry of composite and enumeration descriptors.
///
/// The population engine treats the registry as a read-only oracle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRegistry {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Optional seed for deterministic generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Optional recursion depth limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Composite type definitions
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,

    /// Enumeration definitions
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,

    /// Cached type lookup (not serialized)
    #[serde(skip)]
    type_map: HashMap<String, usize>,

    /// Cached enum lookup (not serialized)
    #[serde(skip)]
    enum_map: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            version: default_version(),
            ..Default::default()
        }
    }

    /// Parse a registry from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut registry: Self = serde_yaml::from_str(yaml)?;
        registry.validate()?;
        registry.build_lookup();
        Ok(registry)
    }

    /// Load a registry from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.version != 1 {
            return Err(SchemaError::UnsupportedVersion(self.version));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let names = self
            .types
            .iter()
            .map(|t| t.name.as_str())
            .chain(self.enums.iter().map(|e| e.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(SchemaError::DuplicateType(name.to_string()));
            }
        }

        for ty in &self.types {
            check_fields(ty)?;
        }
        Ok(())
    }

    /// Build the internal lookup maps.
    fn build_lookup(&mut self) {
        self.type_map = self
            .types
            .iter()
            .enumerate()
            .map(|(idx, ty)| (ty.name.clone(), idx))
            .collect();
        self.enum_map = self
            .enums
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.name.clone(), idx))
            .collect();
    }

    /// Register a composite type.
    pub fn register_type(&mut self, descriptor: TypeDescriptor) -> Result<(), SchemaError> {
        if self.contains(&descriptor.name) {
            return Err(SchemaError::DuplicateType(descriptor.name));
        }
        check_fields(&descriptor)?;
        self.type_map
            .insert(descriptor.name.clone(), self.types.len());
        self.types.push(descriptor);
        Ok(())
    }

    /// Register an enumeration type.
    pub fn register_enum(&mut self, descriptor: EnumDescriptor) -> Result<(), SchemaError> {
        if self.contains(&descriptor.name) {
            return Err(SchemaError::DuplicateType(descriptor.name));
        }
        self.enum_map
            .insert(descriptor.name.clone(), self.enums.len());
        self.enums.push(descriptor);
        Ok(())
    }

    /// Get a composite type by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_map.get(name).and_then(|&idx| self.types.get(idx))
    }

    /// Get an enumeration type by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enum_map.get(name).and_then(|&idx| self.enums.get(idx))
    }

    /// Check if the name is a registered enumeration.
    pub fn is_enum(&self, name: &str) -> bool {
        self.enum_map.contains_key(name)
    }

    /// Check if the name is registered, as a composite or an enumeration.
    pub fn contains(&self, name: &str) -> bool {
        self.type_map.contains_key(name) || self.enum_map.contains_key(name)
    }

    /// Get all composite type names in registration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }
}

fn check_fields(descriptor: &TypeDescriptor) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for field in &descriptor.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                type_name: descriptor.name.clone(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}
