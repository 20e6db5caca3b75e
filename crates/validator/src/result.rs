//! Validation result adapter
//!
//! [`ValidationResult`] is the uniform `{success, data | errors}` shape that
//! rendering layers consume, and [`flatten`] reduces an issue list to one
//! message per field path.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::{ValidationIssue, ValidationIssues};

/// Outcome of checking one candidate.
///
/// Exactly one variant is populated and `errors` is never empty.
///
/// # Examples
///
/// ```
/// use formfield_validator::prelude::*;
///
/// let schema = create_ssn_schema(SsnSchemaOptions::default());
/// let result = schema.safe_check_str("000-12-3456");
///
/// assert!(result.is_failure());
/// assert_eq!(result.errors().unwrap().first().code, "invalidArea");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// The candidate was accepted.
    Success {
        /// The accepted, possibly normalized value.
        data: T,
    },
    /// The candidate was rejected.
    Failure {
        /// Issues in detection order.
        errors: ValidationIssues,
    },
}

impl<T> ValidationResult<T> {
    /// Returns `true` for [`ValidationResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success { .. })
    }

    /// Returns `true` for [`ValidationResult::Failure`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The accepted value, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ValidationResult::Success { data } => Some(data),
            ValidationResult::Failure { .. } => None,
        }
    }

    /// The issues, if any.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationIssues> {
        match self {
            ValidationResult::Success { .. } => None,
            ValidationResult::Failure { errors } => Some(errors),
        }
    }

    /// First issue message, if any.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors().map(|errors| errors.first().message.as_ref())
    }

    /// Path → first message map; empty on success.
    #[must_use]
    pub fn flatten(&self) -> IndexMap<String, String> {
        self.errors().map(flatten).unwrap_or_default()
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the issues of a failed check.
    pub fn into_result(self) -> Result<T, ValidationIssues> {
        match self {
            ValidationResult::Success { data } => Ok(data),
            ValidationResult::Failure { errors } => Err(errors),
        }
    }

    /// Maps the accepted value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ValidationResult<U> {
        match self {
            ValidationResult::Success { data } => ValidationResult::Success { data: f(data) },
            ValidationResult::Failure { errors } => ValidationResult::Failure { errors },
        }
    }
}

impl<T> From<Result<T, ValidationIssues>> for ValidationResult<T> {
    fn from(outcome: Result<T, ValidationIssues>) -> Self {
        match outcome {
            Ok(data) => ValidationResult::Success { data },
            Err(errors) => ValidationResult::Failure { errors },
        }
    }
}

impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ValidationResult::Failure { errors } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

/// Reduces issues to a `path → message` map.
///
/// Paths are dot-joined (`""` for root issues). Only the first issue per
/// path is kept; insertion order is detection order.
///
/// # Examples
///
/// ```
/// use formfield_validator::foundation::ValidationIssue;
/// use formfield_validator::result::flatten;
///
/// let issues = [
///     ValidationIssue::new("cityRequired", "City is required").at("city"),
///     ValidationIssue::new("cityInvalid", "City must be APO, FPO, or DPO").at("city"),
///     ValidationIssue::new("zipInvalid", "Please enter a valid ZIP code").at("zipCode"),
/// ];
/// let map = flatten(&issues);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["city"], "City is required");
/// ```
pub fn flatten<'a, I>(issues: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = &'a ValidationIssue>,
{
    let mut map = IndexMap::new();
    for issue in issues {
        map.entry(issue.path_string())
            .or_insert_with(|| issue.message.to_string());
    }
    map
}
