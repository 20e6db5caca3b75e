//! Phone number fields, US or international.

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::Pattern;

/// Options for [`create_phone_schema`].
///
/// `required` defaults to `true`; `international` (default `false`) switches
/// from the US pattern to the international one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneSchemaOptions {
    pub required: bool,
    pub international: bool,
    pub messages: MessageOverrides,
}

impl Default for PhoneSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            international: false,
            messages: MessageOverrides::new(),
        }
    }
}

impl PhoneSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn international(mut self, international: bool) -> Self {
        self.international = international;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for PhoneSchemaOptions {
    const SCHEMA: &'static str = "phone";
}

/// Schema built by [`create_phone_schema`].
#[derive(Debug, Clone)]
pub struct PhoneSchema {
    field: StringField,
}

/// Builds a phone schema.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let us = create_phone_schema(PhoneSchemaOptions::default());
/// assert!(us.safe_check_str("(555) 123-4567").is_success());
/// assert!(us.safe_check_str("+442071234567").is_failure());
///
/// let intl = create_phone_schema(PhoneSchemaOptions::default().international(true));
/// assert!(intl.safe_check_str("+442071234567").is_success());
/// ```
#[must_use]
pub fn create_phone_schema(options: PhoneSchemaOptions) -> PhoneSchema {
    tracing::trace!(?options, "building phone schema");
    let messages = &options.messages;
    let (pattern, default) = if options.international {
        (
            Pattern::InternationalPhone,
            "Please enter a valid international phone number",
        )
    } else {
        (Pattern::UsPhone, "Please enter a valid phone number")
    };
    let invalid = messages.resolve(Rule::Invalid, || Some(default.to_owned()));
    let rules = RuleChain::new().gate(Rule::Invalid, invalid, move |s: &str| pattern.is_match(s));

    PhoneSchema {
        field: StringField::new(Presence::new(options.required, messages), rules),
    }
}

impl FieldSchema for PhoneSchema {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "phone"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        self.field.check(input)
    }
}
