//! Free-text fields with optional length bounds.

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::message::{MessageOverrides, Rule};

/// Options for [`create_text_schema`].
///
/// | field | default |
/// |---|---|
/// | `required` | `true` |
/// | `min` | none (ignored when `<= 0`) |
/// | `max` | none |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSchemaOptions {
    pub required: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub messages: MessageOverrides,
}

impl Default for TextSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            messages: MessageOverrides::new(),
        }
    }
}

impl TextSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for TextSchemaOptions {
    const SCHEMA: &'static str = "text";
}

/// Schema built by [`create_text_schema`].
#[derive(Debug, Clone)]
pub struct TextSchema {
    field: StringField,
}

/// Builds a text schema.
///
/// Length counts Unicode scalar values.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let schema = create_text_schema(TextSchemaOptions::default().min(2).max(5));
///
/// assert!(schema.safe_check_str("héé").is_success());
/// assert_eq!(
///     schema.safe_check_str("x").first_message(),
///     Some("Must be at least 2 characters")
/// );
/// ```
#[must_use]
pub fn create_text_schema(options: TextSchemaOptions) -> TextSchema {
    tracing::trace!(?options, "building text schema");
    let messages = &options.messages;
    let mut rules = RuleChain::new();

    if let Some(min) = options.min.filter(|min| *min > 0) {
        let message = messages.resolve(Rule::Min, || Some(format!("Must be at least {min} characters")));
        rules = rules
            .refine(Rule::Min, message, move |s: &str| char_count(s) >= min)
            .with_param("min", min.to_string());
    }
    if let Some(max) = options.max {
        let message =
            messages.resolve(Rule::Max, || Some(format!("Must be no more than {max} characters")));
        rules = rules
            .refine(Rule::Max, message, move |s: &str| char_count(s) <= max)
            .with_param("max", max.to_string());
    }

    TextSchema {
        field: StringField::new(Presence::new(options.required, messages), rules),
    }
}

fn char_count(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

impl FieldSchema for TextSchema {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "text"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        self.field.check(input)
    }
}
