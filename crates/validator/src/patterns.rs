//! Pattern catalog
//!
//! Named, anchored matchers for the formats the field families share, plus
//! the static lookup tables (states, territories, military codes, name
//! suffixes). Patterns carry no field configuration; membership checks such
//! as "is this a real state" are separate from the shape checks here.
//!
//! Digit classes are spelled `[0-9]` because `\d` in the `regex` crate is
//! Unicode-aware.

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// REGEXES
// ============================================================================

static SSN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$").unwrap());

static SSN_FLEXIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$").unwrap());

static VA_FILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[cC]?[0-9]{7,9}$").unwrap());

static US_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\([0-9]{3}\) ?|[0-9]{3}-)[0-9]{3}-[0-9]{4}$").unwrap());

static INTERNATIONAL_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").unwrap());

static ZIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

static ZIP_PLUS4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());

// Shape only: consecutive dots and other RFC violations pass on purpose.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static DATE_US: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/([0-9]{4})$").unwrap()
});

static DATE_ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap()
});

static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z\s'-]*$").unwrap());

static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?-?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]{2})?$").unwrap()
});

static STATE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

static MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:0?[1-9]|1[0-2])$").unwrap());

static DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0?[1-9]|[12][0-9]|3[01])$").unwrap());

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:19|20)[0-9]{2}$").unwrap());

static MILITARY_CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:APO|FPO|DPO)$").unwrap());

static MILITARY_STATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:AA|AE|AP)$").unwrap());

// ============================================================================
// PATTERN
// ============================================================================

/// A named format from the catalog.
///
/// # Examples
///
/// ```
/// use formfield_validator::patterns::Pattern;
///
/// assert!(Pattern::ZipPlus4.is_match("12345-6789"));
/// assert!(Pattern::ZipPlus4.is_match("12345"));
/// assert!(!Pattern::Zip.is_match("12345-6789"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `DDD-DD-DDDD`.
    Ssn,
    /// Nine SSN digits, dashes optional.
    SsnFlexible,
    /// Optional `C`/`c` then 7–9 digits.
    VaFileNumber,
    /// `(DDD) DDD-DDDD` (space optional) or `DDD-DDD-DDDD`.
    UsPhone,
    /// Optional `+`, no leading zero, 2–15 digits.
    InternationalPhone,
    /// Five digits.
    Zip,
    /// Five digits with optional `-DDDD`.
    ZipPlus4,
    /// `local@domain.tld` shape.
    Email,
    /// `MM/DD/YYYY`, month 01–12, day 01–31.
    DateUs,
    /// `YYYY-MM-DD`, month 01–12, day 01–31.
    DateIso,
    /// A letter, then letters, spaces, hyphens and apostrophes.
    Name,
    /// Dollar amount with optional thousands separators and cents.
    Currency,
    /// Two uppercase letters.
    StateCode,
    /// 1–12 with optional leading zero.
    Month,
    /// 1–31 with optional leading zero.
    Day,
    /// 1900–2099.
    Year,
    /// `APO`, `FPO` or `DPO`, any case.
    MilitaryCity,
    /// `AA`, `AE` or `AP`.
    MilitaryState,
}

impl Pattern {
    /// Every catalog entry.
    pub const ALL: [Pattern; 18] = [
        Pattern::Ssn,
        Pattern::SsnFlexible,
        Pattern::VaFileNumber,
        Pattern::UsPhone,
        Pattern::InternationalPhone,
        Pattern::Zip,
        Pattern::ZipPlus4,
        Pattern::Email,
        Pattern::DateUs,
        Pattern::DateIso,
        Pattern::Name,
        Pattern::Currency,
        Pattern::StateCode,
        Pattern::Month,
        Pattern::Day,
        Pattern::Year,
        Pattern::MilitaryCity,
        Pattern::MilitaryState,
    ];

    /// Catalog name of the pattern.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Ssn => "SSN",
            Pattern::SsnFlexible => "SSN_FLEXIBLE",
            Pattern::VaFileNumber => "VA_FILE_NUMBER",
            Pattern::UsPhone => "US_PHONE",
            Pattern::InternationalPhone => "INTERNATIONAL_PHONE",
            Pattern::Zip => "ZIP",
            Pattern::ZipPlus4 => "ZIP_PLUS4",
            Pattern::Email => "EMAIL",
            Pattern::DateUs => "DATE_MM_DD_YYYY",
            Pattern::DateIso => "DATE_ISO",
            Pattern::Name => "NAME",
            Pattern::Currency => "CURRENCY",
            Pattern::StateCode => "STATE_CODE",
            Pattern::Month => "MONTH",
            Pattern::Day => "DAY",
            Pattern::Year => "YEAR",
            Pattern::MilitaryCity => "MILITARY_CITY",
            Pattern::MilitaryState => "MILITARY_STATE",
        }
    }

    /// The compiled, anchored regex.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Pattern::Ssn => &SSN,
            Pattern::SsnFlexible => &SSN_FLEXIBLE,
            Pattern::VaFileNumber => &VA_FILE_NUMBER,
            Pattern::UsPhone => &US_PHONE,
            Pattern::InternationalPhone => &INTERNATIONAL_PHONE,
            Pattern::Zip => &ZIP,
            Pattern::ZipPlus4 => &ZIP_PLUS4,
            Pattern::Email => &EMAIL,
            Pattern::DateUs => &DATE_US,
            Pattern::DateIso => &DATE_ISO,
            Pattern::Name => &NAME,
            Pattern::Currency => &CURRENCY,
            Pattern::StateCode => &STATE_CODE,
            Pattern::Month => &MONTH,
            Pattern::Day => &DAY,
            Pattern::Year => &YEAR,
            Pattern::MilitaryCity => &MILITARY_CITY,
            Pattern::MilitaryState => &MILITARY_STATE,
        }
    }

    /// Returns `true` if the whole input matches.
    #[must_use]
    pub fn is_match(self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}

// ============================================================================
// LOOKUP TABLES
// ============================================================================

/// The 50 states, the District of Columbia and the five inhabited territories.
pub const US_STATES: [&str; 56] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "AS", "GU", "MP", "PR", "VI",
];

/// Armed Forces state codes: Americas, Europe, Pacific.
pub const MILITARY_STATES: [&str; 3] = ["AA", "AE", "AP"];

/// Military post office designations.
pub const MILITARY_CITIES: [&str; 3] = ["APO", "FPO", "DPO"];

/// Accepted name suffixes. The empty string (no suffix) is accepted separately.
pub const NAME_SUFFIXES: [&str; 6] = ["Jr.", "Sr.", "II", "III", "IV", "V"];

/// Returns `true` for a state, DC or territory code. Case-sensitive.
#[must_use]
pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}

/// Returns `true` for `AA`, `AE` or `AP`.
#[must_use]
pub fn is_military_state(code: &str) -> bool {
    MILITARY_STATES.contains(&code)
}

/// Returns `true` for `APO`, `FPO` or `DPO` in any case.
#[must_use]
pub fn is_military_city(city: &str) -> bool {
    MILITARY_CITIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(city))
}

// ============================================================================
// TESTS
// ============================================================================
