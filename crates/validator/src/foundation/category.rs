//! Issue taxonomy
//!
//! Every rule belongs to exactly one [`IssueKind`]. The kind is what a
//! consumer should branch on when it needs to treat, say, missing values
//! differently from out-of-range ones; the rule code is finer grained.
//!
//! ## Kinds
//!
//! - [`IssueKind::Required`] - value absent or empty when mandatory
//! - [`IssueKind::Invalid`] - wrong type or pattern mismatch
//! - [`IssueKind::RangeViolation`] - length, amount, date or size bounds
//! - [`IssueKind::StructuralViolation`] - internal structure (SSN groups,
//!   calendar consistency, military taxonomy)
//! - [`IssueKind::CountViolation`] - too many or too few files

use std::fmt;

use serde::Serialize;

/// Category of a failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    /// Value absent or empty when mandatory.
    Required,
    /// Fails the type or pattern check.
    Invalid,
    /// Outside a min/max, date or size bound.
    RangeViolation,
    /// Internally inconsistent value.
    StructuralViolation,
    /// Wrong number of items.
    CountViolation,
}

impl IssueKind {
    /// Returns the kind name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IssueKind::Required => "required",
            IssueKind::Invalid => "invalid",
            IssueKind::RangeViolation => "rangeViolation",
            IssueKind::StructuralViolation => "structuralViolation",
            IssueKind::CountViolation => "countViolation",
        }
    }

    /// Returns `true` for kinds that a user fixes by supplying a value rather
    /// than correcting one.
    #[must_use]
    pub const fn is_presence(self) -> bool {
        matches!(self, IssueKind::Required)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
