//! Postal address fields.
//!
//! Three shapes, selected by `type`:
//!
//! - `us`: street, optional lines 2/3, city, state (a real state, DC or
//!   territory code), ZIP or ZIP+4;
//! - `military`: the same layout, but city must be `APO`/`FPO`/`DPO` (any
//!   case) and state one of `AA`/`AE`/`AP`;
//! - `international`: street, city and country, with free-text province and
//!   postal code.
//!
//! With `required = false` every subfield becomes presence-optional, but any
//! non-empty subfield is still format-checked. That keeps an optional
//! military address from slipping through with a civilian city or state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::combinators::{Collector, Presence, RuleChain, StringField};
use crate::foundation::{FieldSchema, SchemaOptions, ValidationIssues};
use crate::json::{field, is_blank};
use crate::message::{MessageOverrides, Rule};
use crate::patterns::{Pattern, is_military_city, is_military_state, is_us_state};

// ============================================================================
// OPTIONS
// ============================================================================

/// Address shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Us,
    Military,
    International,
}

/// Options for [`create_address_schema`].
///
/// | field | default |
/// |---|---|
/// | `type` | `us` |
/// | `includeLine2` / `includeLine3` | `false` |
/// | `required` | `true` |
/// | `messages` | empty |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressSchemaOptions {
    #[serde(rename = "type")]
    pub kind: AddressKind,
    pub include_line2: bool,
    pub include_line3: bool,
    pub required: bool,
    pub messages: MessageOverrides,
}

impl Default for AddressSchemaOptions {
    fn default() -> Self {
        Self {
            kind: AddressKind::Us,
            include_line2: false,
            include_line3: false,
            required: true,
            messages: MessageOverrides::new(),
        }
    }
}

impl AddressSchemaOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn kind(mut self, kind: AddressKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn include_line2(mut self, include: bool) -> Self {
        self.include_line2 = include;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn include_line3(mut self, include: bool) -> Self {
        self.include_line3 = include;
        self
    }

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

impl SchemaOptions for AddressSchemaOptions {
    const SCHEMA: &'static str = "address";
}

// ============================================================================
// OUTPUT
// ============================================================================

/// An accepted address. Only the subfields of the configured shape that
/// were filled in are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        Some(match key {
            "street" => &mut self.street,
            "street2" => &mut self.street2,
            "street3" => &mut self.street3,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "zipCode" => &mut self.zip_code,
            "country" => &mut self.country,
            "province" => &mut self.province,
            "postalCode" => &mut self.postal_code,
            _ => return None,
        })
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Schema built by [`create_address_schema`].
#[derive(Debug, Clone)]
pub struct AddressSchema {
    kind: AddressKind,
    type_gate: Presence,
    fields: Vec<(&'static str, StringField)>,
}

struct Builder<'a> {
    required: bool,
    messages: &'a MessageOverrides,
}

impl Builder<'_> {
    fn presence(&self, rule: Rule) -> Presence {
        Presence::with_rule(self.required, rule, self.messages.resolve(rule, || None), self.messages)
    }

    fn text(&self, rule: Rule) -> StringField {
        StringField::free_text(self.presence(rule))
    }

    fn optional_text(&self) -> StringField {
        StringField::free_text(Presence::new(false, self.messages))
    }

    fn checked(&self, rule: Rule, invalid: Rule, default: Option<&str>, predicate: fn(&str) -> bool) -> StringField {
        let message = self.messages.resolve(invalid, || default.map(str::to_owned));
        StringField::new(
            self.presence(rule),
            RuleChain::new().gate(invalid, message, move |s: &str| predicate(s)),
        )
    }

    fn zip(&self) -> StringField {
        self.checked(Rule::ZipRequired, Rule::ZipInvalid, None, |s| Pattern::ZipPlus4.is_match(s))
    }
}

/// Builds an address schema.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = create_address_schema(AddressSchemaOptions::default().kind(AddressKind::Military));
///
/// let ok = schema.safe_check(&json!({
///     "street": "Unit 1", "city": "apo", "state": "AE", "zipCode": "09012"
/// }));
/// assert!(ok.is_success());
///
/// let bad = schema.safe_check(&json!({
///     "street": "Unit 1", "city": "Springfield", "state": "AE", "zipCode": "09012"
/// }));
/// assert_eq!(bad.flatten()["city"], "City must be APO, FPO, or DPO");
/// ```
#[must_use]
pub fn create_address_schema(options: AddressSchemaOptions) -> AddressSchema {
    tracing::trace!(?options, "building address schema");
    let b = Builder {
        required: options.required,
        messages: &options.messages,
    };

    let mut fields = vec![("street", b.text(Rule::StreetRequired))];
    if options.include_line2 {
        fields.push(("street2", b.optional_text()));
    }
    if options.include_line3 {
        fields.push(("street3", b.optional_text()));
    }

    match options.kind {
        AddressKind::Us => {
            fields.push(("city", b.text(Rule::CityRequired)));
            fields.push((
                "state",
                b.checked(Rule::StateRequired, Rule::StateInvalid, None, |s| {
                    Pattern::StateCode.is_match(s) && is_us_state(s)
                }),
            ));
            fields.push(("zipCode", b.zip()));
        }
        AddressKind::Military => {
            fields.push((
                "city",
                b.checked(Rule::CityRequired, Rule::CityInvalid, None, is_military_city),
            ));
            fields.push((
                "state",
                b.checked(
                    Rule::StateRequired,
                    Rule::StateInvalid,
                    Some("State must be AA, AE, or AP"),
                    is_military_state,
                ),
            ));
            fields.push(("zipCode", b.zip()));
        }
        AddressKind::International => {
            fields.push(("city", b.text(Rule::CityRequired)));
            fields.push(("country", b.text(Rule::CountryRequired)));
            fields.push(("province", b.optional_text()));
            fields.push(("postalCode", b.optional_text()));
        }
    }

    AddressSchema {
        kind: options.kind,
        type_gate: Presence::new(options.required, &options.messages),
        fields,
    }
}

impl AddressSchema {
    /// The configured shape.
    #[must_use]
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Subfield keys in validation order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }
}

impl FieldSchema for AddressSchema {
    type Output = Option<Address>;

    fn name(&self) -> &'static str {
        "address"
    }

    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues> {
        if !input.is_object() && !input.is_null() {
            return Err(self.type_gate.wrong_type(input).into());
        }
        let blank = self.keys().all(|key| is_blank(field(input, key)));
        if blank && !self.type_gate.is_required() {
            return Ok(None);
        }

        let mut collector = Collector::new();
        let mut address = Address::default();
        for (key, rules) in &self.fields {
            if let Some(value) = collector.field(*key, rules.check(field(input, key))) {
                if let Some(slot) = address.slot(key) {
                    *slot = value;
                }
            }
        }
        collector.finish(Some(address))
    }
}

// ============================================================================
// TESTS
// ============================================================================
