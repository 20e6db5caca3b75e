//! Personal name fields: a single name and the composed full name.
//!
//! A full name is validated part by part. `first` and `last` follow the
//! overall `required` flag, `middle` is always optional and `suffix` must be
//! one of [`NAME_SUFFIXES`] or empty. Part issues carry the part key as
//! their path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::combinators::{Collector, Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::json::{field, is_blank};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::{NAME_SUFFIXES, Pattern};

const DEFAULT_LABEL: &str = "Name";
const DEFAULT_MIN: usize = 1;
const DEFAULT_MAX: usize = 100;

// ============================================================================
// SINGLE NAME
// ============================================================================

/// Options for [`create_name_schema`].
///
/// | field | default |
/// |---|---|
/// | `required` | `true` |
/// | `min` | `1` |
/// | `max` | `100` |
/// | `label` | `"Name"`, used in default messages |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameSchemaOptions {
    pub required: bool,
    pub min: usize,
    pub max: usize,
    pub label: String,
    pub messages: MessageOverrides,
}

impl Default for NameSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            label: DEFAULT_LABEL.to_owned(),
            messages: MessageOverrides::new(),
        }
    }
}

impl NameSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }
}

impl SchemaOptions for NameSchemaOptions {
    const SCHEMA: &'static str = "name";
}

/// Schema built by [`create_name_schema`].
#[derive(Debug, Clone)]
pub struct NameSchema {
    field: StringField,
}

/// Name pattern plus length bounds, messages worded around `label`.
fn name_rules(label: &str, min: usize, max: usize, messages: &MessageOverrides) -> RuleChain<str> {
    let invalid = messages.resolve(Rule::Invalid, || {
        Some(format!(
            "{label} may only contain letters, spaces, hyphens, and apostrophes"
        ))
    });
    let too_short = messages.resolve(Rule::Min, || {
        Some(format!("{label} must be at least {min} characters"))
    });
    let too_long = messages.resolve(Rule::Max, || {
        Some(format!("{label} must be no more than {max} characters"))
    });

    RuleChain::new()
        .gate(Rule::Invalid, invalid, |s: &str| Pattern::Name.is_match(s))
        .refine(Rule::Min, too_short, move |s: &str| s.chars().count() >= min)
        .with_param("min", min.to_string())
        .refine(Rule::Max, too_long, move |s: &str| s.chars().count() <= max)
        .with_param("max", max.to_string())
}

/// Builds a single-name schema.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let schema = create_name_schema(NameSchemaOptions::default().label("Nickname"));
///
/// assert!(schema.safe_check_str("Mary-Jane O'Neil").is_success());
/// assert_eq!(
///     schema.safe_check_str("").first_message(),
///     Some("Nickname is required")
/// );
/// ```
#[must_use]
pub fn create_name_schema(options: NameSchemaOptions) -> NameSchema {
    tracing::trace!(?options, "building name schema");
    let messages = &options.messages;
    let label = options.label.as_str();
    let required = messages.resolve(Rule::Required, || Some(format!("{label} is required")));

    NameSchema {
        field: StringField::new(
            Presence::with_rule(options.required, Rule::Required, required, messages),
            name_rules(label, options.min, options.max, messages),
        ),
    }
}

impl FieldSchema for NameSchema {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "name"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        self.field.check(input)
    }
}

// ============================================================================
// FULL NAME
// ============================================================================

/// Options for [`create_full_name_schema`]. `required` defaults to `true`
/// and applies to `first` and `last`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FullNameSchemaOptions {
    pub required: bool,
    pub messages: MessageOverrides,
}

impl Default for FullNameSchemaOptions {
    fn default() -> Self {
        Self {
            required: true,
            messages: MessageOverrides::new(),
        }
    }
}

impl FullNameSchemaOptions {
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

impl SchemaOptions for FullNameSchemaOptions {
    const SCHEMA: &'static str = "fullName";
}

/// An accepted full name. `first` and `last` are empty only when the schema
/// is optional and the part was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Schema built by [`create_full_name_schema`].
#[derive(Debug, Clone)]
pub struct FullNameSchema {
    type_gate: Presence,
    first: StringField,
    middle: StringField,
    last: StringField,
    suffix: StringField,
}

const PART_KEYS: [&str; 4] = ["first", "middle", "last", "suffix"];

fn name_part(
    label: &str,
    required: bool,
    missing: Rule,
    messages: &MessageOverrides,
) -> StringField {
    StringField::new(
        Presence::with_rule(required, missing, messages.resolve(missing, || None), messages),
        name_rules(label, DEFAULT_MIN, DEFAULT_MAX, messages),
    )
}

/// Builds a full-name schema over `{first, middle, last, suffix}`.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = create_full_name_schema(FullNameSchemaOptions::default());
///
/// let ok = schema.safe_check(&json!({"first": "Ada", "last": "Lovelace", "suffix": "III"}));
/// assert!(ok.is_success());
///
/// let bad = schema.safe_check(&json!({"first": "Ada", "last": "", "suffix": "Esq."}));
/// let flat = bad.flatten();
/// assert_eq!(flat["last"], "Last name is required");
/// assert_eq!(flat["suffix"], "Please select a valid suffix");
/// ```
#[must_use]
pub fn create_full_name_schema(options: FullNameSchemaOptions) -> FullNameSchema {
    tracing::trace!(?options, "building full name schema");
    let messages = &options.messages;
    let suffix_message = messages.resolve(Rule::SuffixInvalid, || None);

    FullNameSchema {
        type_gate: Presence::new(options.required, messages),
        first: name_part("First name", options.required, Rule::FirstRequired, messages),
        middle: name_part("Middle name", false, Rule::Required, messages),
        last: name_part("Last name", options.required, Rule::LastRequired, messages),
        suffix: StringField::new(
            Presence::new(false, messages),
            RuleChain::new().gate(Rule::SuffixInvalid, suffix_message, |s: &str| {
                NAME_SUFFIXES.contains(&s)
            }),
        ),
    }
}

impl FieldSchema for FullNameSchema {
    type Output = Option<FullName>;

    fn name(&self) -> &'static str {
        "full_name"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        if !input.is_object() && !input.is_null() {
            return Err(self.type_gate.wrong_type(input).into());
        }
        let blank = PART_KEYS.iter().all(|key| is_blank(field(input, key)));
        if blank && !self.type_gate.is_required() {
            return Ok(None);
        }

        let mut collector = Collector::new();
        let first = collector.field("first", self.first.check(field(input, "first")));
        let middle = collector.field("middle", self.middle.check(field(input, "middle")));
        let last = collector.field("last", self.last.check(field(input, "last")));
        let suffix = collector.field("suffix", self.suffix.check(field(input, "suffix")));

        if !collector.is_clean() {
            return collector.finish(None);
        }
        Ok(Some(FullName {
            first: first.flatten().unwrap_or_default(),
            middle: middle.flatten(),
            last: last.flatten().unwrap_or_default(),
            suffix: suffix.flatten(),
        }))
    }
}
