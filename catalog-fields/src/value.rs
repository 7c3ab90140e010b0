//! `FieldValue`: the closed set of field types as one sum type.

use crate::error::FieldTypeResult;
use crate::field_type::FieldType;
use crate::types::{Dropdown, ListField, Number, RichText, Text, Toggle, TranslatedText};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A validated attribute value of any built-in field type.
///
/// Catalog code holds attribute values as `FieldValue` so it can store,
/// update and render them without knowing the concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Text),
    TranslatedText(TranslatedText),
    RichText(RichText),
    Number(Number),
    Toggle(Toggle),
    Dropdown(Dropdown),
    ListField(ListField),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            FieldValue::Text($inner) => $body,
            FieldValue::TranslatedText($inner) => $body,
            FieldValue::RichText($inner) => $body,
            FieldValue::Number($inner) => $body,
            FieldValue::Toggle($inner) => $body,
            FieldValue::Dropdown($inner) => $body,
            FieldValue::ListField($inner) => $body,
        }
    };
}

impl FieldValue {
    /// The registry identifier of the underlying field type.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Text(_) => Text::IDENTIFIER,
            Self::TranslatedText(_) => TranslatedText::IDENTIFIER,
            Self::RichText(_) => RichText::IDENTIFIER,
            Self::Number(_) => Number::IDENTIFIER,
            Self::Toggle(_) => Toggle::IDENTIFIER,
            Self::Dropdown(_) => Dropdown::IDENTIFIER,
            Self::ListField(_) => ListField::IDENTIFIER,
        }
    }

    /// The current value as JSON. Equal to [`FieldValue::to_json`]; use the
    /// typed accessors (`as_text`, ...) to borrow the stored shape instead.
    pub fn value(&self) -> Value {
        self.to_json()
    }

    /// Validates `raw` against the underlying type and replaces the value.
    /// On error the previous value is kept.
    pub fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        let identifier = self.identifier();
        dispatch!(self, inner => inner.set_value(raw)).inspect_err(|e| {
            tracing::debug!(field_type = identifier, error = %e, "Rejected field value");
        })
    }

    pub fn to_json(&self) -> Value {
        dispatch!(self, inner => inner.to_json())
    }

    pub fn to_display_string(&self) -> String {
        dispatch!(self, inner => inner.to_display_string())
    }

    /// Returns true if the value carries no content: `null`, an empty
    /// string, or an empty translation map or list. Toggles are never blank;
    /// off is a value.
    pub fn is_blank(&self) -> bool {
        match self.to_json() {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_translated_text(&self) -> Option<&TranslatedText> {
        match self {
            Self::TranslatedText(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for FieldValue {
                fn from(inner: $variant) -> Self {
                    Self::$variant(inner)
                }
            }
        )*
    };
}

impl_from_variant!(Text, TranslatedText, RichText, Number, Toggle, Dropdown, ListField);
