//! Error types for field type construction, assignment and configuration.

use thiserror::Error;

/// Errors raised by field types and the field type registry.
///
/// `Validation` is the error every variant reports when a value does not
/// match its declared shape. It is always recoverable: the instance the value
/// was assigned to keeps its previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldTypeError {
    /// A value did not match the variant's shape.
    #[error("{field_type} value must be {expected}")]
    Validation {
        field_type: &'static str,
        expected: String,
    },

    /// No field type is registered under this identifier.
    #[error("unknown field type: {0}")]
    UnknownType(String),

    /// A field type with this identifier is already registered.
    #[error("field type already registered: {0}")]
    DuplicateType(String),

    /// The type-specific configuration of an attribute is malformed.
    #[error("invalid configuration for {field_type}: {message}")]
    InvalidConfiguration {
        field_type: &'static str,
        message: String,
    },
}

impl FieldTypeError {
    pub(crate) fn validation(field_type: &'static str, expected: impl Into<String>) -> Self {
        Self::Validation {
            field_type,
            expected: expected.into(),
        }
    }

    pub(crate) fn configuration(field_type: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field_type,
            message: message.into(),
        }
    }

    /// Returns true for value-shape errors, the kind a form should show next
    /// to the offending input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type for field type operations.
pub type FieldTypeResult<T> = Result<T, FieldTypeError>;

/// Errors raised while parsing field configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid fields config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Locale(#[from] catalog_types::Error),
}
