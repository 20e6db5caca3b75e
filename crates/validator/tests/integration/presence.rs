//! `required` handling, uniformly across families.

use std::str::FromStr;

use formfield_validator::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

use crate::common::frozen_clock;

/// Checks `input` against the named family with default options apart from
/// `required`, discarding the accepted value.
fn check(family: &str, required: bool, input: &Value) -> ValidationResult<()> {
    match family {
        "text" => create_text_schema(TextSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "email" => create_email_schema(EmailSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "phone" => create_phone_schema(PhoneSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "ssn" => create_ssn_schema(SsnSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "date" => create_date_schema(DateSchemaOptions::default().required(required))
            .with_clock(frozen_clock())
            .safe_check(input)
            .map(drop),
        "memorableDate" => {
            create_memorable_date_schema(MemorableDateSchemaOptions::default().required(required))
                .safe_check(input)
                .map(drop)
        }
        "currency" => create_currency_schema(CurrencySchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "name" => create_name_schema(NameSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "fullName" => create_full_name_schema(FullNameSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "address" => create_address_schema(AddressSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "file" => create_file_schema(FileSchemaOptions::default().required(required))
            .safe_check(input)
            .map(drop),
        "files" => create_file_schema(FileSchemaOptions::default().max_files(5).required(required))
            .safe_check(input)
            .map(drop),
        other => panic!("unknown family {other}"),
    }
}

fn empty_candidates(family: &str) -> Vec<Value> {
    let mut candidates = vec![json!(null)];
    candidates.push(match family {
        "memorableDate" => json!({"month": "", "day": "", "year": ""}),
        "fullName" => json!({"first": "", "middle": "", "last": "", "suffix": ""}),
        "address" => json!({"street": "", "city": "", "state": "", "zipCode": ""}),
        "file" => return candidates,
        "files" => json!([]),
        _ => json!(""),
    });
    candidates
}

#[rstest]
fn optional_family_accepts_empty(
    #[values(
        "text",
        "email",
        "phone",
        "ssn",
        "date",
        "memorableDate",
        "currency",
        "name",
        "fullName",
        "address",
        "file",
        "files"
    )]
    family: &str,
) {
    for input in empty_candidates(family) {
        let result = check(family, false, &input);
        assert!(result.is_success(), "{family} rejected optional {input}: {result:?}");
    }
}

#[rstest]
fn required_family_rejects_empty(
    #[values(
        "text",
        "email",
        "phone",
        "ssn",
        "date",
        "memorableDate",
        "currency",
        "name",
        "fullName",
        "address",
        "file",
        "files"
    )]
    family: &str,
) {
    for input in empty_candidates(family) {
        let result = check(family, true, &input);
        let issues = result.errors().unwrap_or_else(|| panic!("{family} accepted {input}"));
        for issue in issues {
            let rule = Rule::from_str(&issue.code).unwrap();
            assert_eq!(rule.kind(), IssueKind::Required, "{family}: {issue}");
            assert!(!issue.message.is_empty());
        }
    }
}

#[rstest]
#[case("text", "This field is required")]
#[case("email", "This field is required")]
#[case("currency", "This field is required")]
#[case("name", "Name is required")]
#[case("fullName", "First name is required")]
#[case("address", "Street address is required")]
#[case("file", "This field is required")]
fn required_message(#[case] family: &str, #[case] expected: &str) {
    assert_eq!(check(family, true, &json!(null)).first_message(), Some(expected));
}

#[test]
fn whitespace_counts_as_present() {
    let result = check("text", true, &json!("   "));
    assert!(result.is_success());
    assert_eq!(check("email", true, &json!(" ")).errors().unwrap().first().code, "invalid");
}
