//! Core traits for the schema system
//!
//! [`FieldSchema`] is the contract every field family implements: a pure,
//! reusable check of one candidate value. [`SchemaOptions`] is the matching
//! configuration contract for loading a family's options from JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::foundation::{ConfigError, ValidationIssues};
use crate::result::ValidationResult;

// ============================================================================
// CORE SCHEMA TRAIT
// ============================================================================

/// A composed, immutable validator for one field shape.
///
/// Implementations hold only construction-time configuration, so a schema
/// can be shared between threads and invoked any number of times with
/// identical results for identical input (time-relative date rules aside).
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = create_email_schema(EmailSchemaOptions::default());
///
/// assert!(schema.safe_check(&json!("user@example.com")).is_success());
/// assert!(schema.safe_check(&json!("not-an-email")).is_failure());
/// assert!(schema.safe_check(&json!(42)).is_failure());
/// ```
pub trait FieldSchema: Send + Sync {
    /// The accepted (possibly normalized) value.
    type Output;

    /// Short family name used in log events.
    fn name(&self) -> &'static str;

    /// Checks a candidate.
    ///
    /// Never panics on malformed input: wrong types, `null`, arrays and
    /// objects all come back as issues.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of issues when the candidate is rejected.
    fn check(&self, input: &Value) -> Result<Self::Output, ValidationIssues>;

    /// Checks a candidate and wraps the outcome in a [`ValidationResult`].
    fn safe_check(&self, input: &Value) -> ValidationResult<Self::Output> {
        let outcome = self.check(input);
        if let Err(issues) = &outcome {
            tracing::debug!(
                schema = self.name(),
                issues = issues.len(),
                first = %issues.first().code,
                "candidate rejected"
            );
        }
        ValidationResult::from(outcome)
    }

    /// Convenience wrapper for string candidates.
    fn safe_check_str(&self, input: &str) -> ValidationResult<Self::Output> {
        self.safe_check(&Value::String(input.to_owned()))
    }

    /// Returns `true` if the candidate is accepted.
    fn is_valid(&self, input: &Value) -> bool {
        self.check(input).is_ok()
    }
}

// ============================================================================
// OPTIONS TRAIT
// ============================================================================

/// Configuration record for one field family.
///
/// Every field has a default, so `{}` and `null` both load the defaults.
/// Unrecognized keys are ignored.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let options = CurrencySchemaOptions::from_json_str(
///     r#"{"min": 10, "allowNegative": true, "color": "blue"}"#,
/// )
/// .unwrap();
/// assert_eq!(options.min, Some(10.0));
/// assert!(options.allow_negative);
/// ```
pub trait SchemaOptions: DeserializeOwned + Default {
    /// Family name reported in configuration errors.
    const SCHEMA: &'static str;

    /// Loads options from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Shape`] when a recognized option has the wrong
    /// type.
    fn from_json(value: &Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        <Self as serde::Deserialize>::deserialize(value).map_err(|source| ConfigError::Shape {
            schema: Self::SCHEMA,
            source,
        })
    }

    /// Loads options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] for malformed JSON and
    /// [`ConfigError::Shape`] for mistyped options.
    fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text).map_err(ConfigError::Syntax)?;
        Self::from_json(&value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
