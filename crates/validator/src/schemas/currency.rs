//! Dollar amount fields.
//!
//! Strings have every `$` and `,` stripped before parsing; JSON numbers are
//! taken as-is. Negatives are rejected unless `allowNegative` is set, and
//! `min`/`max` are inclusive bounds on the parsed amount.

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Presence, RuleChain};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssue, ValidationIssues};
use crate::format::format_amount_bound;
use crate::message::{MessageOverrides, Rule};

/// Options for [`create_currency_schema`].
///
/// | field | default |
/// |---|---|
/// | `required` | `true` |
/// | `min` / `max` | none |
/// | `allowNegative` | `false` |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencySchemaOptions {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allow_negative: bool,
    pub messages: MessageOverrides,
}

impl Default for CurrencySchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            allow_negative: false,
            messages: MessageOverrides::new(),
        }
    }
}

impl CurrencySchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for CurrencySchemaOptions {
    const SCHEMA: &'static str = "currency";
}

/// Parses a user-entered amount, ignoring `$` and `,`.
///
/// Returns `None` for empty, non-numeric and non-finite input.
///
/// # Examples
///
/// ```
/// use formfield_validator::schemas::currency::parse_amount;
///
/// assert_eq!(parse_amount("$1,234.56"), Some(1234.56));
/// assert_eq!(parse_amount("-100"), Some(-100.0));
/// assert_eq!(parse_amount("$"), None);
/// assert_eq!(parse_amount("ten"), None);
/// ```
#[must_use]
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Schema built by [`create_currency_schema`].
#[derive(Debug, Clone)]
pub struct CurrencySchema {
    presence: Presence,
    invalid: String,
    rules: RuleChain<f64>,
}

/// Builds a currency schema.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let schema = create_currency_schema(CurrencySchemaOptions::default().min(10.0));
///
/// assert_eq!(schema.safe_check_str("$1,234.56").data(), Some(&Some(1234.56)));
/// assert_eq!(
///     schema.safe_check_str("5").first_message(),
///     Some("Amount must be at least $10")
/// );
/// ```
#[must_use]
pub fn create_currency_schema(options: CurrencySchemaOptions) -> CurrencySchema {
    tracing::trace!(?options, "building currency schema");
    let messages = &options.messages;
    let mut rules = RuleChain::new();

    if !options.allow_negative {
        rules = rules.refine(Rule::Negative, messages.resolve(Rule::Negative, || None), |amount: &f64| {
            *amount >= 0.0
        });
    }
    if let Some(min) = options.min {
        let message = messages.resolve(Rule::Min, || {
            Some(format!("Amount must be at least {}", format_amount_bound(min)))
        });
        rules = rules
            .refine(Rule::Min, message, move |amount: &f64| *amount >= min)
            .with_param("min", min.to_string());
    }
    if let Some(max) = options.max {
        let message = messages.resolve(Rule::Max, || {
            Some(format!("Amount must be no more than {}", format_amount_bound(max)))
        });
        rules = rules
            .refine(Rule::Max, message, move |amount: &f64| *amount <= max)
            .with_param("max", max.to_string());
    }

    CurrencySchema {
        presence: Presence::new(options.required, messages),
        invalid: messages.resolve(Rule::Invalid, || Some("Please enter a valid amount".to_owned())),
        rules,
    }
}

impl CurrencySchema {
    fn invalid(&self) -> ValidationIssue {
        ValidationIssue::new(Rule::Invalid.as_str(), self.invalid.clone())
    }
}

impl FieldSchema for CurrencySchema {
    type Output = Option<f64>;

    fn name(&self) -> &'static str {
        "currency"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        let amount = match input {
            Value::Number(number) => number.as_f64().ok_or_else(|| self.invalid())?,
            other => {
                let Some(text) = self.presence.open(other)? else {
                    return Ok(None);
                };
                parse_amount(text).ok_or_else(|| self.invalid())?
            }
        };
        self.rules.check(&amount)?;
        Ok(Some(amount))
    }
}
