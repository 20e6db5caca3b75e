//! Issue types for validation failures
//!
//! A failed rule is reported as a [`ValidationIssue`]: a rule code, a
//! human-readable message, the path of the (sub)field it concerns and a few
//! templating parameters. A schema that rejects a candidate returns a
//! non-empty [`ValidationIssues`] collection.
//!
//! All string fields use `Cow<'static, str>` so static codes and fallback
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// PATH SEGMENTS
// ============================================================================

/// One segment of an issue path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object member, e.g. `zipCode`.
    Key(Cow<'static, str>),
    /// Array element, e.g. the second uploaded file.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&'static str> for PathSegment {
    fn from(key: &'static str) -> Self {
        PathSegment::Key(Cow::Borrowed(key))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(Cow::Owned(key))
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Path of an issue, root first. Most issues are at most two levels deep.
pub type IssuePath = SmallVec<[PathSegment; 2]>;

// ============================================================================
// VALIDATION ISSUE
// ============================================================================

/// A structured record of one failed rule on one logical field or subfield.
///
/// # Examples
///
/// ```
/// use formfield_validator::foundation::ValidationIssue;
///
/// let issue = ValidationIssue::new("zipInvalid", "Please enter a valid ZIP code")
///     .at("zipCode")
///     .with_param("value", "1234");
///
/// assert_eq!(issue.path_string(), "zipCode");
/// assert_eq!(issue.param("value"), Some("1234"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path of the failing (sub)field. Empty for the candidate itself.
    pub path: IssuePath,

    /// Human-readable message. Never empty.
    pub message: Cow<'static, str>,

    /// Rule identifier, e.g. `required`, `stateInvalid`.
    pub code: Cow<'static, str>,

    /// Parameters for message templating and i18n, in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationIssue {
    /// Creates an issue at the root path.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: IssuePath::new(),
            message: message.into(),
            code: code.into(),
            params: Vec::new(),
        }
    }

    /// Prefixes the path with `segment`.
    ///
    /// Nesting happens inside-out: a schema for a subfield reports issues at
    /// its own root, and the parent schema moves them under the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Adds a templating parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Path segments joined with `.`; the empty string for root issues.
    #[must_use]
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.code, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.path_string(), self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationIssue {}

// ============================================================================
// ISSUE COLLECTION
// ============================================================================

/// A non-empty, ordered collection of issues.
///
/// Order is detection order, so the first issue for a path is the one a
/// form should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues {
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    /// Wraps a single issue.
    #[must_use]
    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Builds a collection, or `None` when `issues` is empty.
    #[must_use]
    pub fn from_vec(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// Returns the first detected issue.
    #[must_use]
    pub fn first(&self) -> &ValidationIssue {
        // Non-empty by construction.
        &self.issues[0]
    }

    /// Returns the number of issues. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns all issues in detection order.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Iterates over the issues in detection order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// Returns `true` if any issue carries `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }

    /// Prefixes every issue path with `segment`.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(self, segment: impl Into<PathSegment> + Clone) -> Self {
        Self {
            issues: self
                .issues
                .into_iter()
                .map(|issue| issue.at(segment.clone()))
                .collect(),
        }
    }

    /// Consumes the collection and returns the issues.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl From<ValidationIssue> for ValidationIssues {
    fn from(issue: ValidationIssue) -> Self {
        Self::single(issue)
    }
}

impl IntoIterator for ValidationIssues {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationIssues {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.issues.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationIssues {}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Errors raised while loading schema options from a configuration document.
///
/// Validation itself never produces these; they only surface when options
/// are read from JSON.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON.
    #[error("options document is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// A recognized option has a value of the wrong shape.
    #[error("invalid {schema} options: {source}")]
    Shape {
        /// Field family the options were meant for.
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// TESTS
// ============================================================================
