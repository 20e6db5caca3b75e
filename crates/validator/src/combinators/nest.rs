//! NEST - moves subfield and element issues under their path
//!
//! Object-shaped families (full name, address, memorable date) and
//! multi-file uploads validate their parts independently. Each part reports
//! issues at its own root; [`Collector`] prefixes them with the part's key or
//! index and keeps every part's issues, in part order.

use crate::foundation::{PathSegment, ValidationIssue, ValidationIssues};

/// Prefixes the issues of a failed subfield check with `segment`.
///
/// # Errors
///
/// Returns the nested issues when `outcome` is an error.
pub fn nested<T>(
    segment: impl Into<PathSegment> + Clone,
    outcome: Result<T, ValidationIssues>,
) -> Result<T, ValidationIssues> {
    outcome.map_err(|issues| issues.at(segment))
}

/// Accumulates issues from several independently checked parts.
///
/// # Examples
///
/// ```
/// use formfield_validator::combinators::Collector;
/// use formfield_validator::foundation::ValidationIssue;
///
/// let mut collector = Collector::new();
/// let first: Option<&str> = collector.field("first", Ok("Ada"));
/// let last: Option<&str> =
///     collector.field("last", Err(ValidationIssue::new("lastRequired", "Last name is required").into()));
///
/// assert_eq!(first, Some("Ada"));
/// assert_eq!(last, None);
///
/// let issues = collector.finish(()).unwrap_err();
/// assert_eq!(issues.first().path_string(), "last");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collector {
    issues: Vec<ValidationIssue>,
}

impl Collector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one part, nesting its issues under `segment`.
    pub fn field<T>(
        &mut self,
        segment: impl Into<PathSegment> + Clone,
        outcome: Result<T, ValidationIssues>,
    ) -> Option<T> {
        match nested(segment, outcome) {
            Ok(value) => Some(value),
            Err(issues) => {
                self.issues.extend(issues);
                None
            }
        }
    }

    /// Records an issue as-is.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns `true` if nothing has failed yet.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `value` if no part failed, otherwise every recorded issue.
    ///
    /// # Errors
    ///
    /// Returns the accumulated issues in recording order.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationIssues> {
        match ValidationIssues::from_vec(self.issues) {
            None => Ok(value),
            Some(issues) => Err(issues),
        }
    }
}
