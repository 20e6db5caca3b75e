//! Lenient date parsing and time-relative predicates.
//!
//! [`parse_date`] accepts the formats date fields receive from forms and
//! configuration:
//!
//! - `YYYY-MM-DD` and `MM/DD/YYYY`, read as UTC midnight,
//! - RFC 3339 date-times (`2024-01-15T12:00:00.000Z`, `...+02:00`),
//! - naive `YYYY-MM-DDTHH:MM[:SS[.f]]`, read as UTC.
//!
//! Day numbers up to 31 roll over into the following month in every format,
//! so `2024-02-30` and `2024-02-30T10:00:00Z` both land on March 1st. Month
//! 13 or day 32 never parse.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::foundation::{Clock, SystemClock};
use crate::patterns::Pattern;

// ============================================================================
// PARSER
// ============================================================================

/// Parses a date or date-time string.
///
/// # Examples
///
/// ```
/// use formfield_validator::validators::parse_date;
///
/// let rolled = parse_date("2024-02-30").unwrap();
/// assert_eq!(rolled.to_rfc3339(), "2024-03-01T00:00:00+00:00");
///
/// assert!(parse_date("01/15/2024").is_some());
/// assert!(parse_date("2024-01-15T12:00:00.000Z").is_some());
/// assert!(parse_date("2024-13-01").is_none());
/// assert!(parse_date("tomorrow").is_none());
/// ```
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Some(caps) = Pattern::DateIso.regex().captures(input) {
        return rolled_over(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = Pattern::DateUs.regex().captures(input) {
        return rolled_over(&caps[3], &caps[1], &caps[2]);
    }
    let caps = DATE_TIME.captures(input)?;
    let day: u64 = caps[3].parse().ok()?;
    let anchored = format!("{}-{}-01{}", &caps[1], &caps[2], &caps[4]);
    strict_date_time(&anchored)?.checked_add_days(Days::new(day.checked_sub(1)?))
}

// Day is captured separately; the rest is parsed against the 1st.
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])([Tt ].+)$").unwrap()
});

fn strict_date_time(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(moment) = DateTime::parse_from_rfc3339(input) {
        return Some(moment.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}

// Day is 1..=31 per the pattern; anything past the month's end carries over.
fn rolled_over(year: &str, month: &str, day: &str) -> Option<DateTime<Utc>> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u64 = day.parse().ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_days(Days::new(day.checked_sub(1)?))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

// ============================================================================
// TIME-RELATIVE PREDICATES
// ============================================================================

/// Returns `true` if `input` parses and is strictly before now.
#[must_use]
pub fn validate_date_in_past(input: &str) -> bool {
    validate_date_in_past_at(input, SystemClock.now())
}

/// Returns `true` if `input` parses and is strictly before `now`.
#[must_use]
pub fn validate_date_in_past_at(input: &str, now: DateTime<Utc>) -> bool {
    parse_date(input).is_some_and(|date| date < now)
}

/// Returns `true` if `input` parses and is strictly after now.
#[must_use]
pub fn validate_date_in_future(input: &str) -> bool {
    validate_date_in_future_at(input, SystemClock.now())
}

/// Returns `true` if `input` parses and is strictly after `now`.
#[must_use]
pub fn validate_date_in_future_at(input: &str, now: DateTime<Utc>) -> bool {
    parse_date(input).is_some_and(|date| date > now)
}

/// Returns `true` if someone born on `birth_date` is at least `min_age`
/// years old today.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formfield_validator::validators::validate_minimum_age_at;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert!(validate_minimum_age_at("2006-06-01", 18, today));
/// assert!(!validate_minimum_age_at("2006-06-02", 18, today));
/// ```
#[must_use]
pub fn validate_minimum_age(birth_date: &str, min_age: u32) -> bool {
    validate_minimum_age_at(birth_date, min_age, SystemClock.now().date_naive())
}

/// Age check against an explicit `today`.
///
/// A February 29 birthday is reached on March 1 in non-leap years.
#[must_use]
pub fn validate_minimum_age_at(birth_date: &str, min_age: u32, today: NaiveDate) -> bool {
    let Some(birth) = parse_date(birth_date).map(|moment| moment.date_naive()) else {
        return false;
    };
    let Some(year) = i32::try_from(min_age)
        .ok()
        .and_then(|years| birth.year().checked_add(years))
    else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .is_some_and(|birthday| birthday <= today)
}

// ============================================================================
// TESTS
// ============================================================================
