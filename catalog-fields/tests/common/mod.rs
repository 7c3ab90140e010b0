//! Shared test helpers for field type tests.

#![allow(dead_code)]

use catalog_fields::{
    FieldContext, FieldType, FieldTypeRegistry, FieldTypeResult, FieldsConfig, LocaleSettings,
};
use catalog_types::LocaleCode;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn locale(code: &str) -> LocaleCode {
    LocaleCode::parse(code).unwrap()
}

pub fn locales(default: &str, fallback: &str) -> LocaleSettings {
    LocaleSettings::new(locale(default), locale(fallback))
}

/// Converts a `json!({...})` literal into a configuration map.
pub fn configuration(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("configuration must be an object, got {other}"),
    }
}

/// Builds `T` with no configuration and `en`/`en` locales.
pub fn build<T: FieldType>(raw: Value) -> FieldTypeResult<T> {
    build_with::<T>(raw, Value::Object(Map::new()))
}

/// Builds `T` with the given configuration and `en`/`en` locales.
pub fn build_with<T: FieldType>(raw: Value, config: Value) -> FieldTypeResult<T> {
    let locales = LocaleSettings::default();
    let config = configuration(config);
    T::build(raw, &FieldContext::new(&locales, &config))
}

/// A registry with every built-in type and `en`/`en` locales.
pub fn registry() -> FieldTypeRegistry {
    init_tracing();
    FieldTypeRegistry::with_defaults(&FieldsConfig::default())
}
