//! Error-message resolution
//!
//! Every failed rule gets its message from three tiers, first non-empty wins:
//!
//! 1. an explicit override supplied in the schema options,
//! 2. a contextual default computed from the options (for example a minimum
//!    formatted as `$1,000`),
//! 3. the rule's hardcoded fallback.
//!
//! The fallback strings are part of the public contract. [`Rule::ALL`]
//! enumerates them so they can be checked independently.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::IssueKind;

// ============================================================================
// RULE IDENTIFIERS
// ============================================================================

/// Identifier of one named rule. Doubles as the override key and the issue
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Required,
    InvalidType,
    Invalid,
    Min,
    Max,
    Past,
    Future,
    Negative,
    InvalidArea,
    InvalidGroup,
    InvalidSerial,
    ItinReserved,
    InvalidDate,
    InvalidMonth,
    InvalidDay,
    InvalidYear,
    MonthRequired,
    DayRequired,
    YearRequired,
    FirstRequired,
    LastRequired,
    SuffixInvalid,
    StreetRequired,
    CityRequired,
    StateRequired,
    ZipRequired,
    CountryRequired,
    StateInvalid,
    CityInvalid,
    ZipInvalid,
    InvalidFile,
    SingleFile,
    FileType,
    FileSize,
    MaxFiles,
}

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 35] = [
        Rule::Required,
        Rule::InvalidType,
        Rule::Invalid,
        Rule::Min,
        Rule::Max,
        Rule::Past,
        Rule::Future,
        Rule::Negative,
        Rule::InvalidArea,
        Rule::InvalidGroup,
        Rule::InvalidSerial,
        Rule::ItinReserved,
        Rule::InvalidDate,
        Rule::InvalidMonth,
        Rule::InvalidDay,
        Rule::InvalidYear,
        Rule::MonthRequired,
        Rule::DayRequired,
        Rule::YearRequired,
        Rule::FirstRequired,
        Rule::LastRequired,
        Rule::SuffixInvalid,
        Rule::StreetRequired,
        Rule::CityRequired,
        Rule::StateRequired,
        Rule::ZipRequired,
        Rule::CountryRequired,
        Rule::StateInvalid,
        Rule::CityInvalid,
        Rule::ZipInvalid,
        Rule::InvalidFile,
        Rule::SingleFile,
        Rule::FileType,
        Rule::FileSize,
        Rule::MaxFiles,
    ];

    /// The rule name as used for overrides and issue codes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::InvalidType => "invalidType",
            Rule::Invalid => "invalid",
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::Past => "past",
            Rule::Future => "future",
            Rule::Negative => "negative",
            Rule::InvalidArea => "invalidArea",
            Rule::InvalidGroup => "invalidGroup",
            Rule::InvalidSerial => "invalidSerial",
            Rule::ItinReserved => "itinReserved",
            Rule::InvalidDate => "invalidDate",
            Rule::InvalidMonth => "invalidMonth",
            Rule::InvalidDay => "invalidDay",
            Rule::InvalidYear => "invalidYear",
            Rule::MonthRequired => "monthRequired",
            Rule::DayRequired => "dayRequired",
            Rule::YearRequired => "yearRequired",
            Rule::FirstRequired => "firstRequired",
            Rule::LastRequired => "lastRequired",
            Rule::SuffixInvalid => "suffixInvalid",
            Rule::StreetRequired => "streetRequired",
            Rule::CityRequired => "cityRequired",
            Rule::StateRequired => "stateRequired",
            Rule::ZipRequired => "zipRequired",
            Rule::CountryRequired => "countryRequired",
            Rule::StateInvalid => "stateInvalid",
            Rule::CityInvalid => "cityInvalid",
            Rule::ZipInvalid => "zipInvalid",
            Rule::InvalidFile => "invalidFile",
            Rule::SingleFile => "singleFile",
            Rule::FileType => "fileType",
            Rule::FileSize => "fileSize",
            Rule::MaxFiles => "maxFiles",
        }
    }

    /// The hardcoded last-resort message.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Rule::Required => "This field is required",
            Rule::InvalidType => "Invalid input",
            Rule::Invalid => "Invalid format",
            Rule::Min => "Value is below the minimum",
            Rule::Max => "Value is above the maximum",
            Rule::Past => "Date must be in the past",
            Rule::Future => "Date must be in the future",
            Rule::Negative => "Negative amounts are not allowed",
            Rule::InvalidArea => "SSN area number cannot be 000",
            Rule::InvalidGroup => "SSN group number cannot be 00",
            Rule::InvalidSerial => "SSN serial number cannot be 0000",
            Rule::ItinReserved => "SSN cannot begin with 9",
            Rule::InvalidDate => "Please enter a valid date",
            Rule::InvalidMonth => "Please enter a valid month",
            Rule::InvalidDay => "Please enter a valid day",
            Rule::InvalidYear => "Please enter a valid year",
            Rule::MonthRequired => "Month is required",
            Rule::DayRequired => "Day is required",
            Rule::YearRequired => "Year is required",
            Rule::FirstRequired => "First name is required",
            Rule::LastRequired => "Last name is required",
            Rule::SuffixInvalid => "Please select a valid suffix",
            Rule::StreetRequired => "Street address is required",
            Rule::CityRequired => "City is required",
            Rule::StateRequired => "State is required",
            Rule::ZipRequired => "ZIP code is required",
            Rule::CountryRequired => "Country is required",
            Rule::StateInvalid => "Please select a valid state",
            Rule::CityInvalid => "City must be APO, FPO, or DPO",
            Rule::ZipInvalid => "Please enter a valid ZIP code",
            Rule::InvalidFile => "Please select a valid file",
            Rule::SingleFile => "Only one file may be selected",
            Rule::FileType => "File type is not allowed",
            Rule::FileSize => "File is too large",
            Rule::MaxFiles => "Too many files selected",
        }
    }

    /// The taxonomy bucket this rule reports under.
    #[must_use]
    pub const fn kind(self) -> IssueKind {
        match self {
            Rule::Required
            | Rule::MonthRequired
            | Rule::DayRequired
            | Rule::YearRequired
            | Rule::FirstRequired
            | Rule::LastRequired
            | Rule::StreetRequired
            | Rule::CityRequired
            | Rule::StateRequired
            | Rule::ZipRequired
            | Rule::CountryRequired => IssueKind::Required,
            Rule::InvalidType
            | Rule::Invalid
            | Rule::InvalidMonth
            | Rule::InvalidDay
            | Rule::InvalidYear
            | Rule::SuffixInvalid
            | Rule::ZipInvalid
            | Rule::InvalidFile
            | Rule::FileType => IssueKind::Invalid,
            Rule::Min
            | Rule::Max
            | Rule::Past
            | Rule::Future
            | Rule::Negative
            | Rule::FileSize => IssueKind::RangeViolation,
            Rule::InvalidArea
            | Rule::InvalidGroup
            | Rule::InvalidSerial
            | Rule::ItinReserved
            | Rule::InvalidDate
            | Rule::StateInvalid
            | Rule::CityInvalid => IssueKind::StructuralViolation,
            Rule::SingleFile | Rule::MaxFiles => IssueKind::CountViolation,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule name: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_owned()))
    }
}

// ============================================================================
// OVERRIDES
// ============================================================================

/// Caller-supplied message overrides, keyed by rule name.
///
/// Deserializes from a flat `{"ruleName": "message"}` object. Keys that do
/// not name a rule are kept but never consulted.
///
/// # Examples
///
/// ```
/// use formfield_validator::message::{MessageOverrides, Rule};
///
/// let overrides = MessageOverrides::new().with(Rule::Required, "Tell us your city");
/// let message = overrides.resolve(Rule::Required, || None);
/// assert_eq!(message, "Tell us your city");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageOverrides(BTreeMap<String, String>);

impl MessageOverrides {
    /// Creates an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the override for `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.0.insert(rule.as_str().to_owned(), message.into());
        self
    }

    /// Returns the override for `rule` if present and non-empty.
    #[must_use]
    pub fn get(&self, rule: Rule) -> Option<&str> {
        self.0
            .get(rule.as_str())
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Resolves the message for `rule`, falling back to the rule's hardcoded
    /// string.
    pub fn resolve<F>(&self, rule: Rule, compute_default: F) -> String
    where
        F: FnOnce() -> Option<String>,
    {
        resolve(self.get(rule), compute_default, rule.fallback_message())
    }

    /// Returns `true` if no overrides are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Picks the first non-empty message of override, computed default and
/// fallback.
///
/// `compute_default` only runs when there is no usable override.
///
/// # Examples
///
/// ```
/// use formfield_validator::message::resolve;
///
/// assert_eq!(resolve(Some("Custom"), || Some("Computed".into()), "Fallback"), "Custom");
/// assert_eq!(resolve(Some(""), || Some("Computed".into()), "Fallback"), "Computed");
/// assert_eq!(resolve(None, || None, "Fallback"), "Fallback");
/// ```
pub fn resolve<F>(override_message: Option<&str>, compute_default: F, fallback: &str) -> String
where
    F: FnOnce() -> Option<String>,
{
    if let Some(message) = override_message.filter(|m| !m.is_empty()) {
        return message.to_owned();
    }
    match compute_default() {
        Some(message) if !message.is_empty() => message,
        _ => fallback.to_owned(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
