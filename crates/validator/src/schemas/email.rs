//! Email address fields.
//!
//! Shape check only (`local@domain.tld`); see [`Pattern::Email`].

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::Pattern;

/// Options for [`create_email_schema`]. `required` defaults to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailSchemaOptions {
    pub required: bool,
    pub messages: MessageOverrides,
}

impl Default for EmailSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            messages: MessageOverrides::new(),
        }
    }
}

impl EmailSchemaOptions {
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

impl SchemaOptions for EmailSchemaOptions {
    const SCHEMA: &'static str = "email";
}

/// Schema built by [`create_email_schema`].
#[derive(Debug, Clone)]
pub struct EmailSchema {
    field: StringField,
}

/// Builds an email schema.
#[must_use]
pub fn create_email_schema(options: EmailSchemaOptions) -> EmailSchema {
    tracing::trace!(?options, "building email schema");
    let messages = &options.messages;
    let invalid = messages.resolve(Rule::Invalid, || {
        Some("Please enter a valid email address".to_owned())
    });
    let rules = RuleChain::new().gate(Rule::Invalid, invalid, |s: &str| Pattern::Email.is_match(s));

    EmailSchema {
        field: StringField::new(Presence::new(options.required, messages), rules),
    }
}

impl FieldSchema for EmailSchema {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "email"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        self.field.check(input)
    }
}
