//! Shared fixtures for catalog model tests.

#![allow(dead_code)]

use catalog_fields::{FieldTypeRegistry, FieldsConfig, LocaleSettings};
use catalog_model::{
    system_schema, AttributableType, AttributeDefinition, AttributeGroup, AttributeSchema,
};
use catalog_types::LocaleCode;
use serde_json::json;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn locale(code: &str) -> LocaleCode {
    LocaleCode::parse(code).unwrap()
}

/// Every built-in field type, `en`/`en` locales.
pub fn registry() -> FieldTypeRegistry {
    init_tracing();
    FieldTypeRegistry::default()
}

/// Every built-in field type with the given default and fallback locales.
pub fn registry_with_locales(default: &str, fallback: &str) -> FieldTypeRegistry {
    init_tracing();
    let config = FieldsConfig {
        locales: LocaleSettings::new(locale(default), locale(fallback)),
        ..FieldsConfig::default()
    };
    FieldTypeRegistry::with_defaults(&config)
}

/// System attributes plus one custom attribute of each remaining type.
///
/// Display order: name, description, sku (details); weight (specs);
/// colour, featured, tags (ungrouped).
pub fn product_schema() -> AttributeSchema {
    let product = AttributableType::Product;
    system_schema(product)
        .with_group(AttributeGroup::new(product, "specs", 2).with_name(locale("en"), "Specs"))
        .with_attribute(AttributeDefinition::text(product, "sku").in_group("details", 3).required())
        .with_attribute(
            AttributeDefinition::new(product, "weight", "number")
                .in_group("specs", 1)
                .configure("min", json!(0)),
        )
        .with_attribute(AttributeDefinition::new(product, "featured", "toggle").with_default(json!(true)))
        .with_attribute(AttributeDefinition::new(product, "colour", "dropdown").configure(
            "options",
            json!([{"value": "red", "label": "Red"}, {"value": "blue"}]),
        ))
        .with_attribute(AttributeDefinition::new(product, "tags", "list-field"))
}
