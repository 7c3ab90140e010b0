//! Field type registry: maps stable identifiers to constructors.
//!
//! The registry is built once at startup and handed to whatever needs to turn
//! a stored `(identifier, raw value, configuration)` triple into a
//! [`FieldValue`]. There is no global instance.

use crate::config::{FieldsConfig, LocaleSettings};
use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{FieldContext, FieldType};
use crate::types::{Dropdown, ListField, Number, RichText, Text, Toggle, TranslatedText};
use crate::value::FieldValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Builds a [`FieldValue`] from a raw value.
pub type FieldConstructor = fn(Value, &FieldContext<'_>) -> FieldTypeResult<FieldValue>;

/// Identifiers of the field types shipped with this crate.
pub const BUILTIN_FIELD_TYPES: [&str; 7] = [
    Text::IDENTIFIER,
    TranslatedText::IDENTIFIER,
    RichText::IDENTIFIER,
    Number::IDENTIFIER,
    Toggle::IDENTIFIER,
    Dropdown::IDENTIFIER,
    ListField::IDENTIFIER,
];

fn construct_as<T>(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<FieldValue>
where
    T: FieldType + Into<FieldValue>,
{
    T::build(raw, ctx).map(Into::into)
}

/// Registry of field types, keyed by identifier.
#[derive(Debug, Clone)]
pub struct FieldTypeRegistry {
    locales: LocaleSettings,
    constructors: BTreeMap<String, FieldConstructor>,
}

impl FieldTypeRegistry {
    /// Creates an empty registry.
    pub fn new(locales: LocaleSettings) -> Self {
        Self {
            locales,
            constructors: BTreeMap::new(),
        }
    }

    /// Creates a registry with every built-in type the config leaves enabled.
    pub fn with_defaults(config: &FieldsConfig) -> Self {
        let mut registry = Self::new(config.locales.clone());
        let builtins: [(&str, FieldConstructor); 7] = [
            (Text::IDENTIFIER, construct_as::<Text>),
            (TranslatedText::IDENTIFIER, construct_as::<TranslatedText>),
            (RichText::IDENTIFIER, construct_as::<RichText>),
            (Number::IDENTIFIER, construct_as::<Number>),
            (Toggle::IDENTIFIER, construct_as::<Toggle>),
            (Dropdown::IDENTIFIER, construct_as::<Dropdown>),
            (ListField::IDENTIFIER, construct_as::<ListField>),
        ];
        for (identifier, constructor) in builtins {
            if config.is_enabled(identifier) {
                registry.constructors.insert(identifier.to_string(), constructor);
            }
        }

        for disabled in &config.disabled_field_types {
            if !BUILTIN_FIELD_TYPES.contains(&disabled.as_str()) {
                warn!(field_type = %disabled, "Disabled field type is not a built-in, ignoring");
            }
        }
        debug!(count = registry.constructors.len(), "Field type registry ready");
        registry
    }

    /// Registers a constructor under `identifier`.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        constructor: FieldConstructor,
    ) -> FieldTypeResult<()> {
        let identifier = identifier.into();
        if self.constructors.contains_key(&identifier) {
            return Err(FieldTypeError::DuplicateType(identifier));
        }
        debug!(field_type = %identifier, "Registered field type");
        self.constructors.insert(identifier, constructor);
        Ok(())
    }

    /// Registers a field type under its own [`FieldType::IDENTIFIER`].
    pub fn register_type<T>(&mut self) -> FieldTypeResult<()>
    where
        T: FieldType + Into<FieldValue>,
    {
        self.register(T::IDENTIFIER, construct_as::<T>)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.constructors.contains_key(identifier)
    }

    /// Registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn locales(&self) -> &LocaleSettings {
        &self.locales
    }

    /// Fails on the first identifier that is not registered.
    ///
    /// Call this once with every identifier the attribute definitions use so
    /// a bad definition is caught at startup rather than on first use.
    pub fn ensure_known<'a, I>(&self, identifiers: I) -> FieldTypeResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match identifiers.into_iter().find(|id| !self.contains(id)) {
            Some(unknown) => Err(FieldTypeError::UnknownType(unknown.to_string())),
            None => Ok(()),
        }
    }

    /// Builds a value of the type registered under `identifier`.
    pub fn construct(
        &self,
        identifier: &str,
        raw: Value,
        configuration: &Map<String, Value>,
    ) -> FieldTypeResult<FieldValue> {
        let constructor = self
            .constructors
            .get(identifier)
            .ok_or_else(|| FieldTypeError::UnknownType(identifier.to_string()))?;
        let ctx = FieldContext::new(&self.locales, configuration);
        constructor(raw, &ctx).inspect_err(|e| {
            debug!(field_type = %identifier, error = %e, "Failed to construct field value");
        })
    }

    /// Builds the neutral (empty) value of the type registered under
    /// `identifier`.
    pub fn neutral(
        &self,
        identifier: &str,
        configuration: &Map<String, Value>,
    ) -> FieldTypeResult<FieldValue> {
        self.construct(identifier, Value::Null, configuration)
    }
}

impl Default for FieldTypeRegistry {
    fn default() -> Self {
        Self::with_defaults(&FieldsConfig::default())
    }
}
