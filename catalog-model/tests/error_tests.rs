use catalog_fields::FieldTypeError;
use catalog_model::{AttributableType, AttributeSchema, CatalogError};
use pretty_assertions::assert_eq;

fn required(handle: &str) -> CatalogError {
    CatalogError::Required {
        handle: handle.to_string(),
    }
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn display_messages() {
    assert_eq!(required("sku").to_string(), "attribute 'sku' is required");
    assert_eq!(
        CatalogError::UnknownAttribute {
            handle: "sku".into(),
            attributable: AttributableType::Collection,
        }
        .to_string(),
        "attribute 'sku' is not defined for collection"
    );
    assert_eq!(
        CatalogError::EntityTypeMismatch {
            expected: AttributableType::Product,
            found: AttributableType::Collection,
        }
        .to_string(),
        "entity is a collection, attribute set is for product"
    );
    assert_eq!(
        CatalogError::InvalidAttributeData.to_string(),
        "attribute data must be a JSON object"
    );
}

#[test]
fn invalid_summarizes_all_errors() {
    let err = CatalogError::Invalid(vec![required("name"), required("sku")]);
    assert_eq!(
        err.to_string(),
        "2 invalid attribute(s): attribute 'name' is required; attribute 'sku' is required"
    );
}

#[test]
fn field_type_error_is_transparent() {
    let err: CatalogError = FieldTypeError::UnknownType("stars".into()).into();
    assert_eq!(err.to_string(), "unknown field type: stars");
    assert_eq!(err.handle(), None);
}

#[test]
fn field_error_exposes_source() {
    use std::error::Error;

    let err = CatalogError::Field {
        handle: "weight".into(),
        source: FieldTypeError::UnknownType("x".into()),
    };
    assert_eq!(err.handle(), Some("weight"));
    assert_eq!(err.source().unwrap().to_string(), "unknown field type: x");
}

// ── by_handle ────────────────────────────────────────────────────

#[test]
fn by_handle_flattens_nested_errors() {
    let err = CatalogError::Invalid(vec![
        required("name"),
        CatalogError::Field {
            handle: "weight".into(),
            source: FieldTypeError::UnknownType("x".into()),
        },
    ]);
    let messages = err.by_handle();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages["name"], "attribute 'name' is required");
    assert_eq!(messages["weight"], "unknown field type: x");
}

#[test]
fn by_handle_keys_general_errors_by_empty_string() {
    let messages = CatalogError::InvalidAttributeData.by_handle();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[""], "attribute data must be a JSON object");
}

#[test]
fn malformed_schema_json_is_a_serialization_error() {
    let err = AttributeSchema::from_json("{\"attributable_type\": ").unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));
    assert!(err.to_string().starts_with("serialization error:"));
    assert_eq!(err.handle(), None);
}
