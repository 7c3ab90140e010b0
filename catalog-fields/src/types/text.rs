use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType, TextConfig, TextFormat};
use serde_json::Value;
use std::fmt;

/// A single, untranslated string.
///
/// `null` is accepted and stored as "no value"; every other non-string
/// input (including `0` and `false`) is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    value: Option<String>,
    format: TextFormat,
}

impl Text {
    /// Creates a plain text value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            format: TextFormat::Text,
        }
    }

    /// Sets how the value is rendered by [`FieldType::to_display_string`].
    #[must_use]
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    /// Returns the string, or `None` if no value is set.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn validate(raw: Value) -> FieldTypeResult<Option<String>> {
        match raw {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!("a string or null, got {}", json_kind(&other)),
            )),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl FieldType for Text {
    const IDENTIFIER: &'static str = "text";
    type Stored = Option<String>;

    fn build(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        let config: TextConfig = ctx.parse_configuration(Self::IDENTIFIER)?;
        Ok(Self {
            value: Self::validate(raw)?,
            format: config.format,
        })
    }

    fn value(&self) -> &Option<String> {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = Self::validate(raw)?;
        Ok(())
    }

    fn to_json(&self) -> Value {
        self.value.clone().map_or(Value::Null, Value::String)
    }

    fn to_display_string(&self) -> String {
        self.value
            .as_deref()
            .map(|s| self.format.render(s))
            .unwrap_or_default()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
