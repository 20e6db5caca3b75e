//! Single-string date fields.
//!
//! Parsing goes through [`parse_date`], which rolls day overflow into the
//! next month (`2024-02-30` is March 1st, with or without a time). Bounds
//! are inclusive; `pastOnly` and `futureOnly` compare strictly against the
//! clock at check time.
//! When both are set, both run and every candidate fails one of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::combinators::{Presence, RuleChain};
use crate::foundation::{FieldSchema, SchemaOptions, SharedClock, ValidationIssue, ValidationIssues, system_clock};
use crate::format::format_us_date;
use crate::message::{MessageOverrides, Rule};
use crate::validators::parse_date;

/// Options for [`create_date_schema`].
///
/// | field | default |
/// |---|---|
/// | `required` | `true` |
/// | `minDate` / `maxDate` | none; any string [`parse_date`] accepts |
/// | `pastOnly` / `futureOnly` | `false` |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateSchemaOptions {
    pub required: bool,
    #[serde(deserialize_with = "lenient_date")]
    pub min_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    pub max_date: Option<DateTime<Utc>>,
    pub past_only: bool,
    pub future_only: bool,
    pub messages: MessageOverrides,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.is_empty() => Ok(None),
        Some(text) => parse_date(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date `{text}`"))),
    }
}

impl Default for DateSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            min_date: None,
            max_date: None,
            past_only: false,
            future_only: false,
            messages: MessageOverrides::new(),
        }
    }
}

impl DateSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_date(mut self, min_date: DateTime<Utc>) -> Self {
        self.min_date = Some(min_date);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_date(mut self, max_date: DateTime<Utc>) -> Self {
        self.max_date = Some(max_date);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn past_only(mut self, past_only: bool) -> Self {
        self.past_only = past_only;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn future_only(mut self, future_only: bool) -> Self {
        self.future_only = future_only;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for DateSchemaOptions {
    const SCHEMA: &'static str = "date";
}

/// Schema built by [`create_date_schema`].
#[derive(Debug, Clone)]
pub struct DateSchema {
    options: DateSchemaOptions,
    clock: SharedClock,
    presence: Presence,
    invalid: String,
    rules: RuleChain<DateTime<Utc>>,
}

/// Builds a date schema reading the wall clock.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use formfield_validator::prelude::*;
/// use std::sync::Arc;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let schema = create_date_schema(DateSchemaOptions::default().past_only(true))
///     .with_clock(Arc::new(FixedClock::new(now)));
///
/// assert!(schema.safe_check_str("2023-12-31").is_success());
/// assert!(schema.safe_check_str("2024-01-15T12:00:00.000Z").is_failure());
/// ```
#[must_use]
pub fn create_date_schema(options: DateSchemaOptions) -> DateSchema {
    DateSchema::build(options, system_clock())
}

impl DateSchema {
    fn build(options: DateSchemaOptions, clock: SharedClock) -> Self {
        tracing::trace!(?options, "building date schema");
        let messages = &options.messages;
        let mut rules = RuleChain::new();

        if let Some(min) = options.min_date {
            let message = messages.resolve(Rule::Min, || {
                Some(format!("Date must be on or after {}", format_us_date(min.date_naive())))
            });
            rules = rules
                .refine(Rule::Min, message, move |date: &DateTime<Utc>| *date >= min)
                .with_param("min", min.to_rfc3339());
        }
        if let Some(max) = options.max_date {
            let message = messages.resolve(Rule::Max, || {
                Some(format!("Date must be on or before {}", format_us_date(max.date_naive())))
            });
            rules = rules
                .refine(Rule::Max, message, move |date: &DateTime<Utc>| *date <= max)
                .with_param("max", max.to_rfc3339());
        }
        if options.past_only {
            let clock = SharedClock::clone(&clock);
            rules = rules.refine(Rule::Past, messages.resolve(Rule::Past, || None), move |date: &DateTime<Utc>| {
                *date < clock.now()
            });
        }
        if options.future_only {
            let clock = SharedClock::clone(&clock);
            rules = rules.refine(Rule::Future, messages.resolve(Rule::Future, || None), move |date: &DateTime<Utc>| {
                *date > clock.now()
            });
        }

        Self {
            presence: Presence::new(options.required, messages),
            invalid: messages.resolve(Rule::Invalid, || Some("Please enter a valid date".to_owned())),
            rules,
            clock,
            options,
        }
    }

    /// Rebuilds the schema around another clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock(self, clock: SharedClock) -> Self {
        Self::build(self.options, clock)
    }

    /// The options the schema was built from.
    #[must_use]
    pub fn options(&self) -> &DateSchemaOptions {
        &self.options
    }

    /// The clock consulted by `pastOnly`/`futureOnly`.
    #[must_use]
    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }
}

impl FieldSchema for DateSchema {
    type Output = Option<DateTime<Utc>>;

    fn name(&self) -> &'static str {
        "date"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        let Some(text) = self.presence.open(input)? else {
            return Ok(None);
        };
        let date = parse_date(text)
            .ok_or_else(|| ValidationIssue::new(Rule::Invalid.as_str(), self.invalid.clone()))?;
        self.rules.check(&date)?;
        Ok(Some(date))
    }
}
