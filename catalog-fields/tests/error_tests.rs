use catalog_fields::{ConfigError, FieldTypeError, FieldsConfig};

#[test]
fn error_display_validation() {
    let err = FieldTypeError::Validation {
        field_type: "text",
        expected: "a string or null, got number".into(),
    };
    assert_eq!(err.to_string(), "text value must be a string or null, got number");
    assert!(err.is_validation());
}

#[test]
fn error_display_unknown_type() {
    let err = FieldTypeError::UnknownType("youtube".into());
    assert_eq!(err.to_string(), "unknown field type: youtube");
    assert!(!err.is_validation());
}

#[test]
fn error_display_duplicate_type() {
    let err = FieldTypeError::DuplicateType("text".into());
    assert!(err.to_string().contains("already registered"));
}

#[test]
fn error_display_invalid_configuration() {
    let err = FieldTypeError::InvalidConfiguration {
        field_type: "number",
        message: "min (5) is greater than max (1)".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid configuration for number"));
    assert!(msg.contains("min (5)"));
}

#[test]
fn config_error_from_locale() {
    let err = FieldsConfig::from_toml_str("[locales]\nfallback = \"??\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Locale(_)));
    assert!(err.to_string().contains("invalid locale code"));
}

#[test]
fn errors_are_cloneable_and_comparable() {
    let err = FieldTypeError::UnknownType("x".into());
    assert_eq!(err.clone(), err);
}
