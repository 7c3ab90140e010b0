mod common;

use catalog_model::{system_schema, AttributableType, AttributeSet};
use catalog_types::EntityId;
use common::registry;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn system_schemas_validate() {
    let registry = registry();
    for kind in [AttributableType::Product, AttributableType::Collection] {
        assert!(system_schema(kind).validate(&registry).is_ok());
    }
}

#[test]
fn system_schema_declares_name_and_description() {
    let schema = system_schema(AttributableType::Product);
    let handles: Vec<_> = schema.ordered().iter().map(|a| a.handle.as_str()).collect();
    assert_eq!(handles, vec!["name", "description"]);

    let name = schema.get("name").unwrap();
    assert_eq!(name.field_type, "translated-text");
    assert_eq!(name.configuration["type"], json!("text"));
    assert_eq!(name.display_name(None, &Default::default()), "Name");

    let description = schema.get("description").unwrap();
    assert_eq!(description.configuration["type"], json!("richtext"));
    assert_eq!(description.section, "main");
}

#[test]
fn system_group_is_named_details() {
    let schema = system_schema(AttributableType::Collection);
    assert_eq!(schema.groups.len(), 1);
    let group = &schema.groups[0];
    assert_eq!(group.handle, "collection_details");
    assert_eq!(group.position, 1);
    assert_eq!(group.name.get("en").map(String::as_str), Some("Details"));
}

#[test]
fn collection_requires_name_and_description() {
    let registry = registry();
    let schema = system_schema(AttributableType::Collection);
    let set = AttributeSet::new(&schema, &registry).unwrap();

    let err = set.hydrate_input(EntityId::new(), &json!({})).unwrap_err();
    let messages = err.by_handle();
    assert_eq!(messages.keys().collect::<Vec<_>>(), vec!["description", "name"]);

    let entity = set
        .hydrate_input(
            EntityId::new(),
            &json!({"name": {"en": "Summer"}, "description": {"en": "<em>Hot</em> picks"}}),
        )
        .unwrap();
    assert_eq!(entity.translate_attribute("description", None).as_deref(), Some("Hot picks"));
}
