//! Error types for the catalog attribute model.

use crate::attribute::AttributableType;
use catalog_fields::FieldTypeError;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while binding attribute values to catalog entities.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A value did not fit the attribute's field type.
    #[error("attribute '{handle}': {source}")]
    Field {
        handle: String,
        #[source]
        source: FieldTypeError,
    },

    /// A required attribute has no value.
    #[error("attribute '{handle}' is required")]
    Required { handle: String },

    /// No attribute with this handle is defined for the entity's type.
    #[error("attribute '{handle}' is not defined for {attributable}")]
    UnknownAttribute {
        handle: String,
        attributable: AttributableType,
    },

    /// An attribute definition belongs to a different attributable type
    /// than the schema or entity it is used with.
    #[error("attribute '{handle}' belongs to {found}, expected {expected}")]
    WrongAttributable {
        handle: String,
        expected: AttributableType,
        found: AttributableType,
    },

    /// An entity was used with the schema of another attributable type.
    #[error("entity is a {found}, attribute set is for {expected}")]
    EntityTypeMismatch {
        expected: AttributableType,
        found: AttributableType,
    },

    #[error("duplicate attribute handle: {0}")]
    DuplicateHandle(String),

    /// An attribute points at a group the schema does not declare.
    #[error("attribute '{handle}' references unknown group '{group}'")]
    UnknownGroup { handle: String, group: String },

    /// Stored attribute data is not a JSON object.
    #[error("attribute data must be a JSON object")]
    InvalidAttributeData,

    /// Several attributes failed at once.
    #[error("{} invalid attribute(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<CatalogError>),

    #[error(transparent)]
    FieldType(#[from] FieldTypeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn summarize(errors: &[CatalogError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CatalogError {
    pub(crate) fn field(handle: &str, source: FieldTypeError) -> Self {
        Self::Field {
            handle: handle.to_string(),
            source,
        }
    }

    /// The attribute handle this error is about, if any.
    pub fn handle(&self) -> Option<&str> {
        match self {
            Self::Field { handle, .. }
            | Self::Required { handle }
            | Self::UnknownAttribute { handle, .. }
            | Self::WrongAttributable { handle, .. }
            | Self::UnknownGroup { handle, .. }
            | Self::DuplicateHandle(handle) => Some(handle.as_str()),
            _ => None,
        }
    }

    /// Flattens the error into `handle → message` pairs for form display.
    ///
    /// Errors not tied to one attribute are keyed by the empty string.
    pub fn by_handle(&self) -> BTreeMap<String, String> {
        let mut messages = BTreeMap::new();
        self.collect_messages(&mut messages);
        messages
    }

    fn collect_messages(&self, messages: &mut BTreeMap<String, String>) {
        match self {
            Self::Invalid(errors) => {
                for error in errors {
                    error.collect_messages(messages);
                }
            }
            Self::Field { handle, source } => {
                messages.insert(handle.clone(), source.to_string());
            }
            other => {
                let key = other.handle().unwrap_or_default().to_string();
                messages.insert(key, other.to_string());
            }
        }
    }
}

/// Result type for catalog model operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
