//! PRESENCE gate - required/optional handling for string candidates

use serde_json::Value;

use crate::foundation::ValidationIssue;
use crate::message::{MessageOverrides, Rule};

/// First stage of every string-shaped schema.
///
/// Decides whether a candidate is absent, of the wrong type, or a non-empty
/// string that should continue to the format checks. Optionality only gates
/// presence: a non-empty optional value goes through the same checks as a
/// required one.
///
/// # Examples
///
/// ```
/// use formfield_validator::combinators::Presence;
/// use formfield_validator::message::MessageOverrides;
/// use serde_json::json;
///
/// let gate = Presence::new(false, &MessageOverrides::new());
/// assert_eq!(gate.open(&json!(null)), Ok(None));
/// assert_eq!(gate.open(&json!("")), Ok(None));
/// assert_eq!(gate.open(&json!("x")), Ok(Some("x")));
/// assert!(gate.open(&json!(42)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    required: bool,
    missing_rule: Rule,
    missing_message: String,
    type_message: String,
}

impl Presence {
    /// Gate reporting absence under the `required` rule.
    #[must_use]
    pub fn new(required: bool, overrides: &MessageOverrides) -> Self {
        Self::with_rule(required, Rule::Required, overrides.resolve(Rule::Required, || None), overrides)
    }

    /// Gate reporting absence under `missing_rule` with an already-resolved
    /// message. Used for subfields such as `cityRequired`.
    #[must_use]
    pub fn with_rule(
        required: bool,
        missing_rule: Rule,
        missing_message: String,
        overrides: &MessageOverrides,
    ) -> Self {
        Self {
            required,
            missing_rule,
            missing_message,
            type_message: overrides.resolve(Rule::InvalidType, || None),
        }
    }

    /// Returns `true` if absent input is rejected.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The issue reported for absent input.
    #[must_use]
    pub fn missing(&self) -> ValidationIssue {
        ValidationIssue::new(self.missing_rule.as_str(), self.missing_message.clone())
    }

    /// The issue reported for a candidate of the wrong JSON type.
    #[must_use]
    pub fn wrong_type(&self, input: &Value) -> ValidationIssue {
        ValidationIssue::new(Rule::InvalidType.as_str(), self.type_message.clone())
            .with_param("received", crate::json::type_name(input))
    }

    /// Classifies a candidate.
    ///
    /// `Ok(None)` means absent and allowed, `Ok(Some(text))` means continue
    /// with `text`.
    ///
    /// # Errors
    ///
    /// Returns the `missing` issue for absent required input and an
    /// `invalidType` issue for anything that is not a string.
    pub fn open<'a>(&self, input: &'a Value) -> Result<Option<&'a str>, ValidationIssue> {
        match input {
            Value::Null => self.absent(),
            Value::String(s) if s.is_empty() => self.absent(),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(self.wrong_type(other)),
        }
    }

    /// Applies the gate to a value already known to be absent.
    ///
    /// # Errors
    ///
    /// Returns the `missing` issue when the gate is required.
    pub fn absent<T>(&self) -> Result<Option<T>, ValidationIssue> {
        if self.required {
            Err(self.missing())
        } else {
            Ok(None)
        }
    }
}
