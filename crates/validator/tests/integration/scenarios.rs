//! End-to-end behaviour of each family against a frozen clock.

use chrono::{NaiveDate, TimeZone, Utc};
use formfield_validator::prelude::*;
use formfield_validator::validators::{
    validate_date_in_future_at, validate_date_in_past_at, validate_minimum_age_at,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::common::{codes, frozen_clock, frozen_now, trace};

mod ssn {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("123-45-6789", true)]
    #[case("000-45-6789", false)]
    #[case("123-00-6789", false)]
    #[case("123-45-0000", false)]
    #[case("923-45-6789", false)]
    fn standalone(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(validate_ssn(input), expected);
    }

    #[test]
    fn schema_reports_every_structural_failure() {
        let schema = create_ssn_schema(SsnSchemaOptions::default());
        let result = schema.safe_check_str("900-00-0000");
        assert_eq!(
            codes(&result),
            vec![
                (String::new(), "invalidGroup".to_owned()),
                (String::new(), "invalidSerial".to_owned()),
                (String::new(), "itinReserved".to_owned()),
            ]
        );
    }

    #[test]
    fn flexible_accepts_bare_digits() {
        let schema = create_ssn_schema(SsnSchemaOptions::default().flexible(true));
        assert!(schema.safe_check_str("123456789").is_success());
        assert!(create_ssn_schema(SsnSchemaOptions::default()).safe_check_str("123456789").is_failure());
    }
}

mod currency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_formatted_amount() {
        let schema = create_currency_schema(CurrencySchemaOptions::default());
        assert_eq!(schema.safe_check_str("$1,234.56").data(), Some(&Some(1234.56)));
    }

    #[test]
    fn negative_needs_opt_in() {
        let strict = create_currency_schema(CurrencySchemaOptions::default());
        assert_eq!(strict.safe_check_str("-100").first_message(), Some("Negative amounts are not allowed"));

        let lenient = create_currency_schema(CurrencySchemaOptions::default().allow_negative(true));
        assert_eq!(lenient.safe_check_str("-100").data(), Some(&Some(-100.0)));
    }
}

mod date {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn past_only_is_strict() {
        let _guard = trace();
        let schema = create_date_schema(DateSchemaOptions::default().past_only(true))
            .with_clock(frozen_clock());

        let now = schema.safe_check_str("2024-01-15T12:00:00.000Z");
        assert_eq!(now.first_message(), Some("Date must be in the past"));
        assert!(schema.safe_check_str("2023-12-31").is_success());
        assert!(schema.safe_check_str("2024-01-15T11:59:59Z").is_success());
    }

    #[test]
    fn future_only_is_strict() {
        let schema = create_date_schema(DateSchemaOptions::default().future_only(true))
            .with_clock(frozen_clock());
        assert!(schema.safe_check_str("2024-01-15T12:00:00Z").is_failure());
        assert!(schema.safe_check_str("01/16/2024").is_success());
    }

    #[test]
    fn past_and_future_both_apply() {
        let schema = create_date_schema(DateSchemaOptions::default().past_only(true).future_only(true))
            .with_clock(frozen_clock());
        assert_eq!(
            codes(&schema.safe_check_str("2024-01-15T12:00:00Z")),
            vec![(String::new(), "past".to_owned()), (String::new(), "future".to_owned())]
        );
        assert_eq!(codes(&schema.safe_check_str("2020-01-01")), vec![(String::new(), "future".to_owned())]);
    }

    #[test]
    fn bounds_are_inclusive_and_formatted() {
        let min = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let schema = create_date_schema(DateSchemaOptions::default().min_date(min).max_date(max));

        assert!(schema.safe_check_str("2024-01-01").is_success());
        assert!(schema.safe_check_str("12/31/2024").is_success());
        assert_eq!(
            schema.safe_check_str("2023-12-31").first_message(),
            Some("Date must be on or after 1/1/2024")
        );
        assert_eq!(
            schema.safe_check_str("2025-01-01").first_message(),
            Some("Date must be on or before 12/31/2024")
        );
    }

    #[test]
    fn single_string_dates_roll_over() {
        let schema = create_date_schema(DateSchemaOptions::default());
        let rolled = schema.safe_check_str("2024-02-30").into_result().unwrap().unwrap();
        assert_eq!(rolled.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(schema.safe_check_str("2024-02-32").is_failure());
    }

    #[test]
    fn standalone_predicates() {
        let now = frozen_now();
        assert!(validate_date_in_past_at("2023-12-31", now));
        assert!(!validate_date_in_past_at("2024-01-15T12:00:00Z", now));
        assert!(validate_date_in_future_at("2024-01-16", now));
        assert!(!validate_date_in_future_at("someday", now));

        let today = now.date_naive();
        assert!(validate_minimum_age_at("2006-01-15", 18, today));
        assert!(!validate_minimum_age_at("2006-01-16", 18, today));
    }
}

mod memorable_date {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("2", "29", "2023", false)]
    #[case("2", "29", "2024", true)]
    #[case("4", "31", "2024", false)]
    fn calendar(#[case] month: &str, #[case] day: &str, #[case] year: &str, #[case] valid: bool) {
        let schema = create_memorable_date_schema(MemorableDateSchemaOptions::default());
        let result = schema.safe_check(&json!({"month": month, "day": day, "year": year}));
        assert_eq!(result.is_success(), valid);
    }

    #[test]
    fn rejects_what_single_string_dates_roll_over() {
        let memorable = create_memorable_date_schema(MemorableDateSchemaOptions::default());
        let single = create_date_schema(DateSchemaOptions::default());
        assert!(single.safe_check_str("2024-04-31").is_success());
        assert!(memorable.safe_check(&json!({"month": 4, "day": 31, "year": 2024})).is_failure());
    }
}

mod address {
    use super::*;
    use pretty_assertions::assert_eq;

    fn military() -> AddressSchema {
        create_address_schema(AddressSchemaOptions::default().kind(AddressKind::Military))
    }

    #[test]
    fn military_city_must_be_routing_code() {
        let result = military().safe_check(&json!({
            "street": "Unit 1", "city": "Springfield", "state": "AE", "zipCode": "09012"
        }));
        assert_eq!(codes(&result), vec![("city".to_owned(), "cityInvalid".to_owned())]);
        assert_eq!(result.flatten()["city"], "City must be APO, FPO, or DPO");
    }

    #[test]
    fn military_city_is_case_insensitive() {
        let result = military().safe_check(&json!({
            "street": "Unit 1", "city": "apo", "state": "AE", "zipCode": "09012"
        }));
        let address = result.into_result().unwrap().unwrap();
        assert_eq!(address.city.as_deref(), Some("apo"));
    }

    #[test]
    fn military_state_message() {
        let result = military().safe_check(&json!({
            "street": "Unit 1", "city": "FPO", "state": "CA", "zipCode": "09012"
        }));
        assert_eq!(result.first_message(), Some("State must be AA, AE, or AP"));
    }

    #[test]
    fn us_address_round_trip() {
        let schema = create_address_schema(AddressSchemaOptions::default().include_line2(true));
        let input = json!({
            "street": "1 Main St", "street2": "Apt 4", "street3": "ignored",
            "city": "Springfield", "state": "IL", "zipCode": "62701-1234"
        });
        let address = schema.safe_check(&input).into_result().unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({
                "street": "1 Main St", "street2": "Apt 4",
                "city": "Springfield", "state": "IL", "zipCode": "62701-1234"
            })
        );
    }

    #[test]
    fn international_needs_country() {
        let schema = create_address_schema(AddressSchemaOptions::default().kind(AddressKind::International));
        let result = schema.safe_check(&json!({"street": "10 Downing St", "city": "London"}));
        assert_eq!(codes(&result), vec![("country".to_owned(), "countryRequired".to_owned())]);
    }
}

mod file {
    use super::*;
    use pretty_assertions::assert_eq;
    use formfield_validator::schemas::DEFAULT_MAX_FILE_SIZE;

    #[test]
    fn single_rejects_any_array() {
        let schema = create_file_schema(FileSchemaOptions::default());
        let pdf = json!({"name": "a.pdf", "size": 10, "type": "application/pdf"});
        assert_eq!(codes(&schema.safe_check(&json!([pdf]))), vec![(String::new(), "singleFile".to_owned())]);
    }

    #[test]
    fn default_types_and_size() {
        let schema = create_file_schema(FileSchemaOptions::default());
        let txt = json!({"name": "notes.txt", "size": 10, "type": "text/plain"});
        let pdf = json!({"name": "a.pdf", "size": DEFAULT_MAX_FILE_SIZE, "type": "application/pdf"});
        assert_eq!(schema.safe_check(&txt).errors().unwrap().first().code, "fileType");
        assert!(schema.safe_check(&pdf).is_success());
    }

    #[test]
    fn multiple_reports_per_element() {
        let schema = create_file_schema(FileSchemaOptions::default().max_files(2));
        let input = json!([
            {"name": "a.png", "size": 1, "type": "image/png"},
            {"name": "b.gif", "size": 1, "type": "image/gif"},
            {"name": "c.png", "size": 1, "type": "image/png"},
        ]);
        let result = schema.safe_check(&input);
        assert_eq!(
            codes(&result),
            vec![(String::new(), "maxFiles".to_owned()), ("1".to_owned(), "fileType".to_owned())]
        );
        assert_eq!(result.flatten()[""], "You may upload up to 2 files");
    }
}

mod standalone {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("5551234567", "(555) 123-4567")]
    #[case("555-123-456", "555-123-456")]
    fn phone_format(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_phone_number(input), expected);
    }

    #[test]
    fn ssn_formatting() {
        assert_eq!(format_ssn("123456789"), "123-45-6789");
        assert_eq!(mask_ssn("123-45-6789"), "***-**-6789");
        assert_eq!(mask_ssn("12345"), "12345");
    }

    #[test]
    fn contact_predicates() {
        assert!(validate_phone_number("(555) 123-4567"));
        assert!(validate_phone_number("5551234567"));
        assert!(!validate_phone_number("555-1234"));
        assert!(validate_zip_code("12345"));
        assert!(!validate_zip_code("1234"));
        assert!(validate_va_file_number("c12345678"));
        assert!(!validate_va_file_number("C123456"));
    }
}

#[test]
fn identical_input_gives_identical_result() {
    let schema = create_address_schema(AddressSchemaOptions::default());
    let input = json!({"street": "", "city": "Springfield", "state": "ZZ", "zipCode": "1"});
    let first = schema.safe_check(&input);
    let second = schema.safe_check(&input);
    assert_eq!(first, second);
    assert!(first.is_failure());
}
