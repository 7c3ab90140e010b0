//! Field configuration. Reads `fields.toml` for locale resolution and the
//! set of enabled field types.

use crate::error::ConfigError;
use catalog_types::LocaleCode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Locales used when a translated value is rendered without an explicit
/// locale, or when the requested locale has no translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// Locale tried first.
    pub default: LocaleCode,
    /// Locale tried when the default has no translation.
    pub fallback: LocaleCode,
}

impl LocaleSettings {
    pub fn new(default: LocaleCode, fallback: LocaleCode) -> Self {
        Self { default, fallback }
    }

    /// Settings where one locale serves as both default and fallback.
    pub fn single(locale: LocaleCode) -> Self {
        Self {
            default: locale.clone(),
            fallback: locale,
        }
    }
}

/// Configuration for the field type registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsConfig {
    #[serde(default)]
    pub locales: LocaleSettings,
    /// Built-in field type identifiers that should not be registered.
    #[serde(default)]
    pub disabled_field_types: Vec<String>,
}

impl FieldsConfig {
    /// Parses a `fields.toml` document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FieldsFile = toml::from_str(contents)?;
        file.into_config()
    }

    /// Loads configuration from a path.
    /// Falls back to the defaults with a warning when the file cannot be
    /// read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No fields config found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "Loaded fields config");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse fields config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read fields config");
                Self::default()
            }
        }
    }

    /// Returns false if the identifier is listed under `disabled`.
    pub fn is_enabled(&self, identifier: &str) -> bool {
        !self.disabled_field_types.iter().any(|d| d == identifier)
    }
}

/// Raw TOML structure matching the fields.toml format.
#[derive(Deserialize)]
struct FieldsFile {
    #[serde(default)]
    locales: LocalesSection,
    #[serde(default, rename = "field-types")]
    field_types: FieldTypesSection,
}

#[derive(Deserialize, Default)]
struct LocalesSection {
    default: Option<String>,
    fallback: Option<String>,
}

#[derive(Deserialize, Default)]
struct FieldTypesSection {
    #[serde(default)]
    disabled: Vec<String>,
}

impl FieldsFile {
    fn into_config(self) -> Result<FieldsConfig, ConfigError> {
        let default = match self.locales.default {
            Some(code) => LocaleCode::parse(&code)?,
            None => LocaleCode::default(),
        };
        // An unset fallback follows the default locale.
        let fallback = match self.locales.fallback {
            Some(code) => LocaleCode::parse(&code)?,
            None => default.clone(),
        };

        Ok(FieldsConfig {
            locales: LocaleSettings::new(default, fallback),
            disabled_field_types: self.field_types.disabled,
        })
    }
}
