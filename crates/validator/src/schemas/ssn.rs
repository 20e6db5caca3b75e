//! Social Security number fields.
//!
//! Pattern first, then the structural refinements in this order: area is
//! not `000`, group is not `00`, serial is not `0000`, first digit is not
//! `9`. The refinements are independent, so `000-00-0000` reports three
//! issues.

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::{Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::Pattern;
use crate::validators::SsnParts;

/// Options for [`create_ssn_schema`].
///
/// `required` defaults to `true`. `flexible` (default `false`) accepts the
/// nine digits without dashes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SsnSchemaOptions {
    pub required: bool,
    pub flexible: bool,
    pub messages: MessageOverrides,
}

impl Default for SsnSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            flexible: false,
            messages: MessageOverrides::new(),
        }
    }
}

impl SsnSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for SsnSchemaOptions {
    const SCHEMA: &'static str = "ssn";
}

/// Schema built by [`create_ssn_schema`].
#[derive(Debug, Clone)]
pub struct SsnSchema {
    field: StringField,
}

/// Builds an SSN schema.
#[must_use]
pub fn create_ssn_schema(options: SsnSchemaOptions) -> SsnSchema {
    tracing::trace!(?options, "building ssn schema");
    let messages = &options.messages;
    let pattern = if options.flexible {
        Pattern::SsnFlexible
    } else {
        Pattern::Ssn
    };
    let invalid = messages.resolve(Rule::Invalid, || {
        Some("Please enter a valid Social Security number".to_owned())
    });

    let rules = RuleChain::new()
        .gate(Rule::Invalid, invalid, move |s: &str| pattern.is_match(s))
        .refine(Rule::InvalidArea, messages.resolve(Rule::InvalidArea, || None), |s: &str| {
            SsnParts::split(s).is_some_and(|parts| parts.area_assigned())
        })
        .refine(Rule::InvalidGroup, messages.resolve(Rule::InvalidGroup, || None), |s: &str| {
            SsnParts::split(s).is_some_and(|parts| parts.group_assigned())
        })
        .refine(Rule::InvalidSerial, messages.resolve(Rule::InvalidSerial, || None), |s: &str| {
            SsnParts::split(s).is_some_and(|parts| parts.serial_assigned())
        })
        .refine(Rule::ItinReserved, messages.resolve(Rule::ItinReserved, || None), |s: &str| {
            SsnParts::split(s).is_some_and(|parts| parts.not_itin())
        });

    SsnSchema {
        field: StringField::new(Presence::new(options.required, messages), rules),
    }
}

impl FieldSchema for SsnSchema {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "ssn"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        self.field.check(input)
    }
}
