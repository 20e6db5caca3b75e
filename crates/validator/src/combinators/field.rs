//! FIELD combinator - presence gate followed by a rule chain

use serde_json::Value;

use crate::combinators::{Presence, RuleChain};
use crate::foundation::ValidationIssues;

/// A complete check for one string-valued field or subfield.
///
/// Absent input stops at the [`Presence`] gate; present input runs the whole
/// [`RuleChain`]. The accepted output is the original string, or `None` for
/// an allowed absence.
///
/// # Examples
///
/// ```
/// use formfield_validator::combinators::{Presence, RuleChain, StringField};
/// use formfield_validator::message::{MessageOverrides, Rule};
/// use formfield_validator::patterns::Pattern;
/// use serde_json::json;
///
/// let zip = StringField::new(
///     Presence::new(false, &MessageOverrides::new()),
///     RuleChain::new().gate(Rule::ZipInvalid, "Bad ZIP", |s: &str| Pattern::ZipPlus4.is_match(s)),
/// );
///
/// assert_eq!(zip.check(&json!("")), Ok(None));
/// assert_eq!(zip.check(&json!("12345")), Ok(Some("12345".to_owned())));
/// assert!(zip.check(&json!("1234")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringField {
    presence: Presence,
    rules: RuleChain<str>,
}

impl StringField {
    /// Combines a gate and a chain.
    #[must_use]
    pub fn new(presence: Presence, rules: RuleChain<str>) -> Self {
        Self { presence, rules }
    }

    /// A field with presence handling only.
    #[must_use]
    pub fn free_text(presence: Presence) -> Self {
        Self::new(presence, RuleChain::new())
    }

    /// The presence gate.
    #[must_use]
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// The format and refinement chain.
    #[must_use]
    pub fn rules(&self) -> &RuleChain<str> {
        &self.rules
    }

    /// Checks a candidate.
    ///
    /// # Errors
    ///
    /// Returns the gate issue, or every chain issue for present input.
    pub fn check(&self, input: &Value) -> Result<Option<String>, ValidationIssues> {
        let Some(text) = self.presence.open(input)? else {
            return Ok(None);
        };
        self.rules.check(text)?;
        Ok(Some(text.to_owned()))
    }
}
