mod common;

use catalog_fields::{
    Dropdown, FieldType, FieldTypeError, ListField, Number, RichText, SelectOption, Toggle,
};
use common::{build, build_with};
use serde_json::{json, Value};

// ── RichText ─────────────────────────────────────────────────────

#[test]
fn rich_text_keeps_html_and_displays_plain_text() {
    let html = "<h2>Care</h2><p>Hand wash &amp; dry flat.</p>";
    let r: RichText = build(json!(html)).unwrap();
    assert_eq!(r.html(), Some(html));
    assert_eq!(r.to_json(), json!(html));
    assert_eq!(r.to_display_string(), "Care Hand wash & dry flat.");
}

#[test]
fn rich_text_display_decodes_named_and_numeric_entities() {
    let r: RichText = build(json!("<p>Caf&eacute; &#8217;s &euro;5</p>")).unwrap();
    assert_eq!(r.to_display_string(), "Café ’s €5");
}

#[test]
fn rich_text_display_hides_script_and_style() {
    let r: RichText = build(json!("<style>p{color:red}</style><p>Shoes</p>")).unwrap();
    assert_eq!(r.to_display_string(), "Shoes");
    let r: RichText = build(json!("<script>alert(1)</script>Hi")).unwrap();
    assert_eq!(r.to_display_string(), "Hi");
}

#[test]
fn rich_text_display_keeps_bare_comparisons() {
    let r: RichText = build(json!("1 < 2 and 3 > 2")).unwrap();
    assert_eq!(r.to_display_string(), "1 < 2 and 3 > 2");
}

#[test]
fn rich_text_rejects_structured_payload() {
    let err = build::<RichText>(json!({"blocks": []})).unwrap_err();
    assert!(err.to_string().starts_with("rich-text value must be"));
}

#[test]
fn rich_text_null_is_empty() {
    let r: RichText = build(Value::Null).unwrap();
    assert_eq!(r.to_json(), Value::Null);
    assert_eq!(r.to_display_string(), "");
}

// ── Number ───────────────────────────────────────────────────────

#[test]
fn number_keeps_integers_exact() {
    let n: Number = build(json!(12)).unwrap();
    assert_eq!(n.as_i64(), Some(12));
    assert_eq!(n.to_json(), json!(12));
    assert_eq!(n.to_display_string(), "12");
}

#[test]
fn number_accepts_floats() {
    let n: Number = build(json!(2.5)).unwrap();
    assert_eq!(n.as_f64(), Some(2.5));
    assert_eq!(n.to_display_string(), "2.5");
}

#[test]
fn number_rejects_numeric_strings() {
    assert!(build::<Number>(json!("12")).unwrap_err().is_validation());
}

#[test]
fn number_enforces_bounds() {
    let config = json!({"min": 0, "max": 10});
    assert!(build_with::<Number>(json!(0), config.clone()).is_ok());
    assert!(build_with::<Number>(json!(10), config.clone()).is_ok());

    let err = build_with::<Number>(json!(11), config.clone()).unwrap_err();
    assert!(err.to_string().contains("between 0 and 10"));
    assert!(build_with::<Number>(json!(-1), config).is_err());
}

#[test]
fn number_bounds_are_exact_for_large_integers() {
    let config = json!({"max": 9_007_199_254_740_992_u64});
    assert!(build_with::<Number>(json!(9_007_199_254_740_992_u64), config.clone()).is_ok());
    assert!(build_with::<Number>(json!(9_007_199_254_740_993_u64), config).is_err());

    let config = json!({"min": -9_007_199_254_740_992_i64});
    assert!(build_with::<Number>(json!(-9_007_199_254_740_993_i64), config).is_err());
}

#[test]
fn number_bounds_compare_integers_with_floats() {
    let config = json!({"min": 0.5, "max": 10});
    assert!(build_with::<Number>(json!(0), config.clone()).is_err());
    assert!(build_with::<Number>(json!(0.5), config.clone()).is_ok());
    assert!(build_with::<Number>(json!(10.0), config.clone()).is_ok());
    assert!(build_with::<Number>(json!(10.25), config).is_err());
}

#[test]
fn number_enforces_integer_only() {
    let config = json!({"integer_only": true});
    assert!(build_with::<Number>(json!(3), config.clone()).is_ok());
    let err = build_with::<Number>(json!(3.5), config).unwrap_err();
    assert!(err.to_string().contains("an integer"));
}

#[test]
fn number_rejects_inverted_bounds() {
    let err = build_with::<Number>(Value::Null, json!({"min": 5, "max": 1})).unwrap_err();
    assert!(matches!(
        err,
        FieldTypeError::InvalidConfiguration { field_type: "number", .. }
    ));
}

#[test]
fn number_out_of_range_set_keeps_previous() {
    let mut n: Number = build_with(json!(5), json!({"max": 10})).unwrap();
    assert!(n.set_value(json!(50)).is_err());
    assert_eq!(n.as_i64(), Some(5));
}

// ── Toggle ───────────────────────────────────────────────────────

#[test]
fn toggle_accepts_booleans_and_null() {
    let on: Toggle = build(json!(true)).unwrap();
    assert!(on.is_on());
    assert_eq!(on.to_json(), json!(true));
    assert_eq!(on.to_display_string(), "true");

    let off: Toggle = build(Value::Null).unwrap();
    assert!(!off.is_on());
    assert_eq!(off.to_json(), json!(false));
}

#[test]
fn toggle_rejects_truthy_non_booleans() {
    for raw in [json!(1), json!("true"), json!("yes")] {
        assert!(build::<Toggle>(raw.clone()).is_err(), "{raw} should be rejected");
    }
}

// ── Dropdown ─────────────────────────────────────────────────────

fn size_options() -> Value {
    json!({"options": [
        {"value": "s", "label": "Small"},
        {"value": "m", "label": "Medium"},
        {"value": "l"}
    ]})
}

#[test]
fn dropdown_accepts_declared_option() {
    let d: Dropdown = build_with(json!("m"), size_options()).unwrap();
    assert_eq!(d.value(), &Some("m".to_string()));
    assert_eq!(d.to_json(), json!("m"));
    assert_eq!(d.to_display_string(), "Medium");
    assert_eq!(d.options().len(), 3);
}

#[test]
fn dropdown_displays_value_when_option_has_no_label() {
    let d: Dropdown = build_with(json!("l"), size_options()).unwrap();
    assert_eq!(d.to_display_string(), "l");
}

#[test]
fn dropdown_rejects_undeclared_option() {
    let err = build_with::<Dropdown>(json!("xl"), size_options()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("one of [s, m, l]"));
    assert!(msg.contains("\"xl\""));
}

#[test]
fn dropdown_without_options_accepts_any_string() {
    let d: Dropdown = build(json!("anything")).unwrap();
    assert_eq!(d.to_display_string(), "anything");
}

#[test]
fn dropdown_rejects_duplicate_options() {
    let config = json!({"options": [{"value": "a"}, {"value": "a"}]});
    let err = build_with::<Dropdown>(Value::Null, config).unwrap_err();
    assert!(matches!(err, FieldTypeError::InvalidConfiguration { .. }));
}

#[test]
fn dropdown_typed_options() {
    let d = Dropdown::with_options(vec![SelectOption::new("red").with_label("Red")]);
    assert_eq!(d.value(), &None);
    assert_eq!(d.options()[0].display(), "Red");
}

// ── ListField ────────────────────────────────────────────────────

#[test]
fn list_field_round_trip_and_display() {
    let l: ListField = build(json!(["cotton", "wool"])).unwrap();
    assert_eq!(l.len(), 2);
    assert_eq!(l.to_json(), json!(["cotton", "wool"]));
    assert_eq!(l.to_display_string(), "cotton, wool");
}

#[test]
fn list_field_reports_offending_item() {
    let err = build::<ListField>(json!(["a", 2])).unwrap_err();
    assert!(err.to_string().contains("item 1 is number"));
}

#[test]
fn list_field_null_is_empty() {
    let l: ListField = build(Value::Null).unwrap();
    assert!(l.is_empty());
    assert_eq!(l, ListField::new(Vec::<String>::new()));
}
