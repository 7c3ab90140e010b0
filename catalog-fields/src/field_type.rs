//! The contract every field type implements.

use crate::config::LocaleSettings;
use crate::error::{FieldTypeError, FieldTypeResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Everything a field type needs to know about the attribute it is built for.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Locale resolution rules for translated values.
    pub locales: &'a LocaleSettings,
    /// Type-specific configuration from the attribute definition,
    /// e.g. `{"type": "richtext"}` or `{"min": 0}`.
    pub configuration: &'a Map<String, Value>,
}

impl<'a> FieldContext<'a> {
    pub fn new(locales: &'a LocaleSettings, configuration: &'a Map<String, Value>) -> Self {
        Self {
            locales,
            configuration,
        }
    }

    /// Deserializes the configuration into a variant's typed config.
    /// Unknown keys are ignored so definitions can carry UI hints.
    pub(crate) fn parse_configuration<T>(&self, field_type: &'static str) -> FieldTypeResult<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.configuration.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_value(Value::Object(self.configuration.clone()))
            .map_err(|e| FieldTypeError::configuration(field_type, e.to_string()))
    }
}

/// A typed value holder with validate-on-write semantics.
///
/// Implementors hold a value of a fixed shape. Every write goes through
/// [`FieldType::set_value`], which either replaces the value or returns a
/// [`FieldTypeError::Validation`] and leaves the holder untouched.
pub trait FieldType: fmt::Debug + fmt::Display + Clone + Default + Send + Sync {
    /// Stable identifier attribute definitions use to select this type.
    const IDENTIFIER: &'static str;

    /// The validated, in-memory shape of the value.
    type Stored;

    /// Builds an instance from a raw value and its attribute context.
    ///
    /// Applies the same validation as [`FieldType::set_value`].
    fn build(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<Self>;

    /// Returns the current value.
    fn value(&self) -> &Self::Stored;

    /// Validates `raw` and, if it fits, replaces the current value.
    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()>;

    /// JSON form used for persistence and API output.
    fn to_json(&self) -> Value;

    /// Human-readable rendering.
    fn to_display_string(&self) -> String;
}

/// Text formatting declared by an attribute's `type` configuration key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Text,
    /// Value is an HTML fragment; display strings drop the markup.
    Richtext,
}

impl TextFormat {
    pub(crate) fn render(self, value: &str) -> String {
        match self {
            Self::Text => value.to_string(),
            Self::Richtext => crate::markup::to_plain_text(value),
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct TextConfig {
    #[serde(default, rename = "type")]
    pub format: TextFormat,
}

/// Human-readable name of a JSON value's kind, for validation messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
