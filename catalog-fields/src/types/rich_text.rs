use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType};
use crate::markup;
use serde_json::Value;
use std::fmt;

/// An HTML fragment produced by a rich text editor.
///
/// Stored and serialized verbatim; the display string is the plain text
/// with markup removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    value: Option<String>,
}

impl RichText {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            value: Some(html.into()),
        }
    }

    /// Returns the raw HTML.
    pub fn html(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn validate(raw: Value) -> FieldTypeResult<Option<String>> {
        match raw {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!("an HTML string or null, got {}", json_kind(&other)),
            )),
        }
    }
}

impl FieldType for RichText {
    const IDENTIFIER: &'static str = "rich-text";
    type Stored = Option<String>;

    fn build(raw: Value, _ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        Ok(Self {
            value: Self::validate(raw)?,
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
            .map(markup::to_plain_text)
            .unwrap_or_default()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
