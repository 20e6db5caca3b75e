//! Message precedence, flattening and the serialized result shape.

use formfield_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[test]
fn every_rule_has_a_fallback() {
    for rule in Rule::ALL {
        assert!(!rule.fallback_message().is_empty(), "{rule:?}");
        assert_eq!(rule.as_str().parse::<Rule>().unwrap(), rule);
    }
}

#[rstest]
#[case(None, "Must be at least 3 characters")]
#[case(Some(""), "Must be at least 3 characters")]
#[case(Some("Too short"), "Too short")]
fn override_beats_computed_default(#[case] custom: Option<&str>, #[case] expected: &str) {
    let mut options = TextSchemaOptions::default().min(3);
    if let Some(custom) = custom {
        options = options.message(Rule::Min, custom);
    }
    let schema = create_text_schema(options);
    assert_eq!(schema.safe_check_str("ab").first_message(), Some(expected));
}

#[test]
fn fallback_when_nothing_is_computed() {
    let schema = create_date_schema(DateSchemaOptions::default().past_only(true));
    assert_eq!(
        schema.safe_check_str("2999-01-01").first_message(),
        Some(Rule::Past.fallback_message())
    );
}

#[test]
fn overrides_reach_nested_parts() {
    let options = AddressSchemaOptions::from_json(&json!({
        "messages": {"zipRequired": "We need your ZIP", "stateInvalid": "Pick a state"}
    }))
    .unwrap();
    let schema = create_address_schema(options);
    let result = schema.safe_check(&json!({"street": "1 Main St", "city": "Springfield", "state": "XX"}));

    let flat = result.flatten();
    assert_eq!(flat["state"], "Pick a state");
    assert_eq!(flat["zipCode"], "We need your ZIP");
}

#[test]
fn file_messages_are_computed_from_options() {
    let schema = create_file_schema(
        FileSchemaOptions::default()
            .max_size(1536)
            .allowed_types(["text/csv", "application/json"]),
    );
    let result = schema.safe_check(&json!({"name": "big.xml", "size": 4096, "type": "text/xml"}));
    assert_eq!(
        result.flatten().into_values().collect::<Vec<_>>(),
        vec!["File size must be less than 1.5 KB".to_owned()]
    );
    let messages: Vec<_> = result.errors().unwrap().iter().map(|i| i.message.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "File size must be less than 1.5 KB".to_owned(),
            "File type must be one of: text/csv, application/json".to_owned(),
        ]
    );
}

#[test]
fn flatten_keeps_first_message_per_path_in_order() {
    let schema = create_address_schema(AddressSchemaOptions::default());
    let result = schema.safe_check(&json!({}));
    let flat = result.flatten();
    assert_eq!(
        flat.into_iter().collect::<Vec<_>>(),
        vec![
            ("street".to_owned(), "Street address is required".to_owned()),
            ("city".to_owned(), "City is required".to_owned()),
            ("state".to_owned(), "State is required".to_owned()),
            ("zipCode".to_owned(), "ZIP code is required".to_owned()),
        ]
    );
}

#[test]
fn result_serializes_as_tagged_shape() {
    let schema = create_full_name_schema(FullNameSchemaOptions::default());

    let ok = schema.safe_check(&json!({"first": "Ada", "last": "Lovelace", "suffix": "II"}));
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({"success": true, "data": {"first": "Ada", "last": "Lovelace", "suffix": "II"}})
    );

    let failed = schema.safe_check(&json!({"first": "Ada", "last": "Lovelace", "suffix": "Esq."}));
    assert_eq!(
        serde_json::to_value(&failed).unwrap(),
        json!({
            "success": false,
            "errors": [{"path": ["suffix"], "message": "Please select a valid suffix", "code": "suffixInvalid"}]
        })
    );
}

#[test]
fn helper_reads_messages_by_path() {
    let schema = create_memorable_date_schema(MemorableDateSchemaOptions::default());
    let result = schema.safe_check(&json!({"month": "13", "day": "1", "year": "2000"}));
    let issues = result.errors().unwrap();
    assert_eq!(message_or_default(issues, "month", "Check the month"), "Please enter a valid month");
    assert_eq!(message_or_default(issues, "day", "Check the day"), "Check the day");
}
