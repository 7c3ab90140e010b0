use crate::attribute::AttributableType;
use catalog_fields::{FieldType, FieldValue};
use catalog_types::EntityId;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A product or collection together with the attribute values it owns.
///
/// Values are keyed by attribute handle. Entities are created and updated
/// through an [`AttributeSet`](crate::AttributeSet) so every value matches
/// its definition; serializing an entity yields the stored JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntity {
    pub id: EntityId,
    pub entity_type: AttributableType,
    pub(crate) attribute_data: BTreeMap<String, FieldValue>,
}

impl CatalogEntity {
    /// Creates an entity with no attribute values.
    pub fn new(id: EntityId, entity_type: AttributableType) -> Self {
        Self {
            id,
            entity_type,
            attribute_data: BTreeMap::new(),
        }
    }

    /// Returns the value of one attribute.
    pub fn attribute(&self, handle: &str) -> Option<&FieldValue> {
        self.attribute_data.get(handle)
    }

    /// Iterates over `(handle, value)` pairs in handle order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.attribute_data.iter().map(|(h, v)| (h.as_str(), v))
    }

    /// Removes an attribute value, e.g. after its definition was deleted.
    pub fn remove_attribute(&mut self, handle: &str) -> Option<FieldValue> {
        self.attribute_data.remove(handle)
    }

    /// Renders one attribute for display.
    ///
    /// Translated attributes resolve `locale` through the configured default
    /// and fallback locales; other types ignore `locale`.
    pub fn translate_attribute(&self, handle: &str, locale: Option<&str>) -> Option<String> {
        self.attribute(handle).map(|value| match value {
            FieldValue::TranslatedText(t) => t.display_in(locale),
            other => other.to_display_string(),
        })
    }

    /// Extracts a plain string from a `text` or `rich-text` attribute.
    pub fn get_str(&self, handle: &str) -> Option<&str> {
        match self.attribute(handle)? {
            FieldValue::Text(t) => t.as_str(),
            FieldValue::RichText(r) => r.html(),
            _ => None,
        }
    }

    /// Extracts a numeric value from a `number` attribute.
    pub fn get_number(&self, handle: &str) -> Option<f64> {
        self.attribute(handle)?.as_number()?.as_f64()
    }

    /// Extracts a boolean value from a `toggle` attribute.
    pub fn get_bool(&self, handle: &str) -> Option<bool> {
        match self.attribute(handle)? {
            FieldValue::Toggle(t) => Some(*t.value()),
            _ => None,
        }
    }

    /// The attribute data as stored: `{handle: serialized value}`.
    pub fn attribute_data_json(&self) -> Value {
        Value::Object(
            self.attribute_data
                .iter()
                .map(|(handle, value)| (handle.clone(), value.to_json()))
                .collect::<Map<_, _>>(),
        )
    }
}
