use crate::config::LocaleSettings;
use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType, TextConfig, TextFormat};
use catalog_types::LocaleCode;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A string per locale, e.g. `{"en": "Shoes", "fr": "Chaussures"}`.
///
/// Rendering without an explicit locale, or for a locale with no
/// translation, resolves through the configured default and fallback
/// locales instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedText {
    value: BTreeMap<LocaleCode, String>,
    locales: LocaleSettings,
    format: TextFormat,
}

impl TranslatedText {
    /// Creates an empty value resolving through `locales`.
    pub fn new(locales: LocaleSettings) -> Self {
        Self {
            value: BTreeMap::new(),
            locales,
            format: TextFormat::Text,
        }
    }

    /// Adds a translation, builder style.
    #[must_use]
    pub fn with_translation(mut self, locale: LocaleCode, text: impl Into<String>) -> Self {
        self.value.insert(locale, text.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    pub fn locales(&self) -> &LocaleSettings {
        &self.locales
    }

    /// Sets the translation for one locale, returning the previous one.
    ///
    /// The key is already a valid [`LocaleCode`], so this cannot fail.
    pub fn insert(&mut self, locale: LocaleCode, text: impl Into<String>) -> Option<String> {
        self.value.insert(locale, text.into())
    }

    /// Removes the translation for one locale.
    pub fn remove(&mut self, locale: &str) -> Option<String> {
        self.value.remove(locale)
    }

    /// Returns the stored translation for exactly this locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.value.get(locale).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Resolves a translation.
    ///
    /// Tries `locale` (when given), then the default locale, then the
    /// fallback locale, then the first stored translation. Returns `None`
    /// only when no translation is stored at all.
    pub fn translate(&self, locale: Option<&str>) -> Option<&str> {
        locale
            .and_then(|l| self.get(l))
            .or_else(|| self.get(self.locales.default.as_str()))
            .or_else(|| self.get(self.locales.fallback.as_str()))
            .or_else(|| self.value.values().next().map(String::as_str))
    }

    /// Renders the translation resolved for `locale`, applying the text
    /// format. Empty when nothing is stored.
    pub fn display_in(&self, locale: Option<&str>) -> String {
        self.translate(locale)
            .map(|s| self.format.render(s))
            .unwrap_or_default()
    }

    fn validate(raw: Value) -> FieldTypeResult<BTreeMap<LocaleCode, String>> {
        match raw {
            Value::Null => Ok(BTreeMap::new()),
            Value::Object(map) => Self::validate_map(map),
            other => Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!(
                    "an object mapping locale codes to strings, got {}",
                    json_kind(&other)
                ),
            )),
        }
    }

    fn validate_map(map: Map<String, Value>) -> FieldTypeResult<BTreeMap<LocaleCode, String>> {
        let mut translations = BTreeMap::new();
        for (key, text) in map {
            let Ok(locale) = LocaleCode::parse(&key) else {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("keyed by locale codes, {key:?} is not one"),
                ));
            };
            let Value::String(text) = text else {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!(
                        "a string for locale {key:?}, got {}",
                        json_kind(&text)
                    ),
                ));
            };
            translations.insert(locale, text);
        }
        Ok(translations)
    }
}

impl FieldType for TranslatedText {
    const IDENTIFIER: &'static str = "translated-text";
    type Stored = BTreeMap<LocaleCode, String>;

    fn build(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        let config: TextConfig = ctx.parse_configuration(Self::IDENTIFIER)?;
        Ok(Self {
            value: Self::validate(raw)?,
            locales: ctx.locales.clone(),
            format: config.format,
        })
    }

    fn value(&self) -> &BTreeMap<LocaleCode, String> {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = Self::validate(raw)?;
        Ok(())
    }

    fn to_json(&self) -> Value {
        Value::Object(
            self.value
                .iter()
                .map(|(locale, text)| (locale.to_string(), Value::String(text.clone())))
                .collect(),
        )
    }

    fn to_display_string(&self) -> String {
        self.display_in(None)
    }
}

impl fmt::Display for TranslatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
