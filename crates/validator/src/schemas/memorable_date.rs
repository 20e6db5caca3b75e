//! Month/day/year date fields.
//!
//! Each part is checked against its own pattern before the three are
//! combined. The combination must name a real calendar day: unlike the
//! single-string date family there is no rollover, so February 30 and a
//! non-leap February 29 are rejected.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Collector, Presence};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssue, ValidationIssues};
use crate::json::{field, is_blank, scalar_text};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::Pattern;

/// Options for [`create_memorable_date_schema`]. `required` defaults to
/// `true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemorableDateSchemaOptions {
    pub required: bool,
    pub messages: MessageOverrides,
}

impl Default for MemorableDateSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            messages: MessageOverrides::new(),
        }
    }
}

impl MemorableDateSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for MemorableDateSchemaOptions {
    const SCHEMA: &'static str = "memorableDate";
}

#[derive(Debug, Clone)]
struct Part {
    key: &'static str,
    pattern: Pattern,
    missing: ValidationIssue,
    invalid: ValidationIssue,
}

impl Part {
    fn new(key: &'static str, pattern: Pattern, missing: Rule, invalid: Rule, messages: &MessageOverrides) -> Self {
        Self {
            key,
            pattern,
            missing: ValidationIssue::new(missing.as_str(), messages.resolve(missing, || None)),
            invalid: ValidationIssue::new(invalid.as_str(), messages.resolve(invalid, || None)),
        }
    }

    fn check(&self, value: &Value) -> Result<u32, ValidationIssues> {
        if is_blank(value) {
            return Err(self.missing.clone().into());
        }
        scalar_text(value)
            .filter(|text| self.pattern.is_match(text))
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| self.invalid.clone().into())
    }
}

/// Schema built by [`create_memorable_date_schema`].
#[derive(Debug, Clone)]
pub struct MemorableDateSchema {
    presence: Presence,
    month: Part,
    day: Part,
    year: Part,
    invalid_date: ValidationIssue,
}

/// Builds a memorable-date schema.
///
/// Input is an object with `month`, `day` and `year`, each a string or an
/// integer.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formfield_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = create_memorable_date_schema(MemorableDateSchemaOptions::default());
///
/// let leap = schema.safe_check(&json!({"month": "2", "day": "29", "year": "2024"}));
/// assert_eq!(leap.data(), Some(&NaiveDate::from_ymd_opt(2024, 2, 29)));
///
/// let common = schema.safe_check(&json!({"month": "2", "day": "29", "year": "2023"}));
/// assert_eq!(common.errors().unwrap().first().code, "invalidDate");
/// ```
#[must_use]
pub fn create_memorable_date_schema(options: MemorableDateSchemaOptions) -> MemorableDateSchema {
    tracing::trace!(?options, "building memorable date schema");
    let messages = &options.messages;
    MemorableDateSchema {
        presence: Presence::new(options.required, messages),
        month: Part::new("month", Pattern::Month, Rule::MonthRequired, Rule::InvalidMonth, messages),
        day: Part::new("day", Pattern::Day, Rule::DayRequired, Rule::InvalidDay, messages),
        year: Part::new("year", Pattern::Year, Rule::YearRequired, Rule::InvalidYear, messages),
        invalid_date: ValidationIssue::new(
            Rule::InvalidDate.as_str(),
            messages.resolve(Rule::InvalidDate, || None),
        ),
    }
}

impl FieldSchema for MemorableDateSchema {
    type Output = Option<NaiveDate>;

    fn name(&self) -> &'static str {
        "memorable_date"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        if !input.is_object() && !input.is_null() {
            return Err(self.presence.wrong_type(input).into());
        }

        let parts = [self.month.key, self.day.key, self.year.key];
        if parts.iter().all(|key| is_blank(field(input, key))) {
            return Ok(self.presence.absent()?);
        }

        let mut collector = Collector::new();
        let month = collector.field(self.month.key, self.month.check(field(input, self.month.key)));
        let day = collector.field(self.day.key, self.day.check(field(input, self.day.key)));
        let year = collector.field(self.year.key, self.year.check(field(input, self.year.key)));

        if let (Some(month), Some(day), Some(year)) = (month, day, year) {
            let date = i32::try_from(year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, month, day));
            if date.is_none() {
                collector.push(self.invalid_date.clone());
            }
            return collector.finish(date);
        }
        collector.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn schema() -> MemorableDateSchema {
        create_memorable_date_schema(MemorableDateSchemaOptions::default())
    }

    fn paths_and_codes(input: &Value) -> Vec<(String, String)> {
        match schema().check(input) {
            Ok(_) => Vec::new(),
            Err(issues) => issues
                .iter()
                .map(|i| (i.path_string(), i.code.to_string()))
                .collect(),
        }
    }

    mod calendar {
        use super::*;
        use pretty_assertions::assert_eq;

        #[rstest]
        #[case("2", "29", "2024", true)]
        #[case("2", "29", "2023", false)]
        #[case("2", "29", "2000", true)]
        #[case("2", "29", "1900", false)]
        #[case("4", "31", "2024", false)]
        #[case("04", "30", "2024", true)]
        #[case("12", "31", "2099", true)]
        fn test_round_trip(
            #[case] month: &str,
            #[case] day: &str,
            #[case] year: &str,
            #[case] valid: bool,
        ) {
            let input = json!({"month": month, "day": day, "year": year});
            assert_eq!(schema().is_valid(&input), valid);
        }

        #[test]
        fn test_mismatch_reported_at_root() {
            let input = json!({"month": "4", "day": "31", "year": "2024"});
            assert_eq!(
                paths_and_codes(&input),
                vec![(String::new(), "invalidDate".to_owned())]
            );
        }

        #[test]
        fn test_integers_accepted() {
            let input = json!({"month": 7, "day": 4, "year": 1976});
            assert_eq!(schema().check(&input), Ok(NaiveDate::from_ymd_opt(1976, 7, 4)));
        }
    }

    mod parts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_each_part_reports_own_path() {
            let input = json!({"month": "13", "day": "0", "year": "1899"});
            assert_eq!(
                paths_and_codes(&input),
                vec![
                    ("month".to_owned(), "invalidMonth".to_owned()),
                    ("day".to_owned(), "invalidDay".to_owned()),
                    ("year".to_owned(), "invalidYear".to_owned()),
                ]
            );
        }

        #[test]
        fn test_partial_reports_missing_parts() {
            let input = json!({"month": "5", "day": "", "year": null});
            assert_eq!(
                paths_and_codes(&input),
                vec![
                    ("day".to_owned(), "dayRequired".to_owned()),
                    ("year".to_owned(), "yearRequired".to_owned()),
                ]
            );
        }

        #[test]
        fn test_non_scalar_part() {
            let input = json!({"month": [1], "day": "1", "year": "2000"});
            assert_eq!(
                paths_and_codes(&input),
                vec![("month".to_owned(), "invalidMonth".to_owned())]
            );
        }
    }

    mod presence {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_empty() {
            let issues = schema().check(&json!({"month": "", "day": "", "year": ""})).unwrap_err();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues.first().code, "required");
            assert_eq!(schema().check(&json!(null)).unwrap_err().first().code, "required");
        }

        #[test]
        fn test_optional_empty() {
            let schema = create_memorable_date_schema(MemorableDateSchemaOptions::default().required(false));
            assert_eq!(schema.check(&json!(null)), Ok(None));
            assert_eq!(schema.check(&json!({})), Ok(None));
            assert!(schema.check(&json!({"month": "1"})).is_err());
        }

        #[test]
        fn test_wrong_type() {
            assert_eq!(schema().check(&json!("2024-01-01")).unwrap_err().first().code, "invalidType");
        }
    }
}
