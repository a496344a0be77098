//! Error types for population.

/// Error type for population operations.
///
/// Errors raised while populating a nested field propagate unchanged to the
/// top-level caller; a failed population never yields a partial instance.
#[derive(Debug, thiserror::Error)]
pub enum PopulateError {
    /// The type has no usable no-argument constructor, or construction failed
    #[error("Failed to construct '{type_name}': {reason}")]
    Construction { type_name: String, reason: String },

    /// A field could not be written
    #[error("Failed to write field '{field}' of '{type_name}': {reason}")]
    FieldAccess {
        type_name: String,
        field: String,
        reason: String,
    },

    /// A declared type could not be resolved
    #[error("Failed to resolve type '{type_name}': {reason}")]
    TypeResolution { type_name: String, reason: String },

    /// The supplied type is not an enumeration
    #[error("Type '{0}' is not an enumeration")]
    NotAnEnum(String),

    /// The enumeration declares no constants
    #[error("Enumeration '{0}' declares no constants")]
    EmptyEnum(String),

    /// A random string was requested from an empty alphabet
    #[error("Cannot draw characters from an empty alphabet")]
    EmptyAlphabet,

    /// A generated value does not fit the target Rust type
    #[error("Expected {expected} value, found {found}")]
    ValueMismatch { expected: String, found: String },
}

impl PopulateError {
    pub(crate) fn construction(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn type_resolution(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TypeResolution {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a value mismatch error.
    pub fn mismatch(expected: impl Into<String>, found: &dummy_core::DummyValue) -> Self {
        Self::ValueMismatch {
            expected: expected.into(),
            found: found.kind_name().to_string(),
        }
    }

    /// Attribute a value mismatch to a field; other errors pass through unchanged.
    pub fn at_field(self, type_name: &str, field: &str) -> Self {
        match self {
            Self::ValueMismatch { expected, found } => Self::FieldAccess {
                type_name: type_name.to_string(),
                field: field.to_string(),
                reason: format!("expected {expected} value, found {found}"),
            },
            other => other,
        }
    }
}
