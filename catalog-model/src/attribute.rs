use catalog_fields::LocaleSettings;
use catalog_types::{AttributeId, LocaleCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of catalog entity an attribute or group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributableType {
    Product,
    Collection,
}

impl fmt::Display for AttributableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => f.write_str("product"),
            Self::Collection => f.write_str("collection"),
        }
    }
}

/// A named group of attributes, used to order them for editing and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub attributable_type: AttributableType,
    pub name: BTreeMap<LocaleCode, String>,
    pub handle: String,
    #[serde(default)]
    pub position: u32,
}

impl AttributeGroup {
    pub fn new(attributable_type: AttributableType, handle: impl Into<String>, position: u32) -> Self {
        Self {
            attributable_type,
            name: BTreeMap::new(),
            handle: handle.into(),
            position,
        }
    }

    #[must_use]
    pub fn with_name(mut self, locale: LocaleCode, name: impl Into<String>) -> Self {
        self.name.insert(locale, name.into());
        self
    }
}

fn default_section() -> String {
    "main".to_string()
}

/// Schema of a single custom attribute.
///
/// Definitions are shared reference data: entities refer to them by
/// `handle` and never own them. `field_type` is a registry identifier such
/// as `"translated-text"`; `configuration` is handed to that field type
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: AttributeId,
    pub attribute_type: AttributableType,
    /// Handle of the [`AttributeGroup`] this attribute is shown in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_group: Option<String>,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub name: BTreeMap<LocaleCode, String>,
    pub handle: String,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    /// Built-in attributes the catalog depends on; not deletable by users.
    #[serde(default)]
    pub system: bool,
}

impl AttributeDefinition {
    pub fn new(
        attribute_type: AttributableType,
        handle: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            id: AttributeId::new(),
            attribute_type,
            attribute_group: None,
            position: 0,
            name: BTreeMap::new(),
            handle: handle.into(),
            section: default_section(),
            field_type: field_type.into(),
            required: false,
            default_value: None,
            configuration: Map::new(),
            system: false,
        }
    }

    /// Shorthand for a translated text attribute.
    pub fn translated_text(attribute_type: AttributableType, handle: impl Into<String>) -> Self {
        Self::new(attribute_type, handle, "translated-text")
    }

    /// Shorthand for a plain text attribute.
    pub fn text(attribute_type: AttributableType, handle: impl Into<String>) -> Self {
        Self::new(attribute_type, handle, "text")
    }

    #[must_use]
    pub fn with_name(mut self, locale: LocaleCode, name: impl Into<String>) -> Self {
        self.name.insert(locale, name.into());
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>, position: u32) -> Self {
        self.attribute_group = Some(group.into());
        self.position = position;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets one configuration key, e.g. `("type", json!("richtext"))`.
    #[must_use]
    pub fn configure(mut self, key: impl Into<String>, value: Value) -> Self {
        self.configuration.insert(key.into(), value);
        self
    }

    /// Resolves the display name for `locale` through the default and
    /// fallback locales, then the handle.
    pub fn display_name(&self, locale: Option<&str>, locales: &LocaleSettings) -> &str {
        locale
            .and_then(|l| self.name.get(l))
            .or_else(|| self.name.get(locales.default.as_str()))
            .or_else(|| self.name.get(locales.fallback.as_str()))
            .map(String::as_str)
            .unwrap_or(&self.handle)
    }
}
