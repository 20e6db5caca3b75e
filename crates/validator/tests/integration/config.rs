//! Loading options from JSON documents.

use formfield_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn empty_and_null_documents_load_defaults() {
    assert_eq!(TextSchemaOptions::from_json(&json!(null)).unwrap(), TextSchemaOptions::default());
    assert_eq!(FileSchemaOptions::from_json_str("{}").unwrap(), FileSchemaOptions::default());
    assert!(NameSchemaOptions::default().required);
}

#[test]
fn unknown_keys_are_ignored() {
    let options = PhoneSchemaOptions::from_json(&json!({"international": true, "mask": "(###)"})).unwrap();
    assert!(options.international);
    let schema = create_phone_schema(options);
    assert!(schema.safe_check_str("+442079460958").is_success());
}

#[test]
fn camel_case_keys() {
    let options = DateSchemaOptions::from_json(&json!({
        "minDate": "01/01/2020",
        "maxDate": "2030-12-31T23:59:59Z",
        "pastOnly": true
    }))
    .unwrap();
    assert!(options.past_only);
    assert_eq!(options.min_date.unwrap().to_rfc3339(), "2020-01-01T00:00:00+00:00");
    assert!(options.max_date.is_some());

    let address = AddressSchemaOptions::from_json(&json!({"type": "military", "includeLine2": true})).unwrap();
    assert_eq!(address.kind, AddressKind::Military);
    assert!(address.include_line2);
}

#[test]
fn malformed_documents_are_config_errors() {
    let syntax = TextSchemaOptions::from_json_str("{min: 3").unwrap_err();
    assert!(matches!(syntax, ConfigError::Syntax(_)));

    let shape = CurrencySchemaOptions::from_json(&json!({"min": "ten"})).unwrap_err();
    match shape {
        ConfigError::Shape { schema, .. } => assert_eq!(schema, "currency"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schemas_are_cloneable_and_shareable() {
    let schema = create_email_schema(EmailSchemaOptions::default());
    let copy = schema.clone();
    let handle = std::thread::spawn(move || copy.safe_check_str("user@example.com").is_success());
    assert!(handle.join().unwrap());
    assert!(schema.safe_check_str("user@").is_failure());
}
