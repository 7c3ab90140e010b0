//! Built-in attributes every catalog starts with.

use crate::attribute::{AttributableType, AttributeDefinition, AttributeGroup};
use crate::schema::AttributeSchema;
use catalog_types::LocaleCode;
use serde_json::json;

/// The group holding the system attributes of `attributable_type`.
pub fn system_group(attributable_type: AttributableType) -> AttributeGroup {
    let handle = match attributable_type {
        AttributableType::Product => "details",
        AttributableType::Collection => "collection_details",
    };
    AttributeGroup::new(attributable_type, handle, 1).with_name(LocaleCode::default(), "Details")
}

/// The required `name` and `description` attributes.
///
/// Both are translated; `name` is plain text and `description` rich text.
pub fn system_attributes(attributable_type: AttributableType) -> Vec<AttributeDefinition> {
    let group = system_group(attributable_type).handle;
    vec![
        AttributeDefinition::translated_text(attributable_type, "name")
            .with_name(LocaleCode::default(), "Name")
            .in_group(group.clone(), 1)
            .configure("type", json!("text"))
            .required()
            .system(),
        AttributeDefinition::translated_text(attributable_type, "description")
            .with_name(LocaleCode::default(), "Description")
            .in_group(group, 2)
            .configure("type", json!("richtext"))
            .required()
            .system(),
    ]
}

/// A schema holding only the system group and attributes. Custom
/// attributes are added on top with [`AttributeSchema::with_attribute`].
pub fn system_schema(attributable_type: AttributableType) -> AttributeSchema {
    let mut schema = AttributeSchema::new(attributable_type).with_group(system_group(attributable_type));
    schema.attributes = system_attributes(attributable_type);
    schema
}
