//! Display formatters
//!
//! Digit-based formatters strip every non-digit first and return the input
//! unchanged when the digit count does not fit the target shape.

use chrono::{Datelike, NaiveDate};

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats ten digits as `(DDD) DDD-DDDD`.
///
/// # Examples
///
/// ```
/// use formfield_validator::format::format_phone_number;
///
/// assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone_number("12345"), "12345");
/// ```
#[must_use]
pub fn format_phone_number(input: &str) -> String {
    let d = digits(input);
    if d.len() == 10 {
        format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..])
    } else {
        input.to_owned()
    }
}

/// Formats nine digits as `DDD-DD-DDDD`.
#[must_use]
pub fn format_ssn(input: &str) -> String {
    let d = digits(input);
    if d.len() == 9 {
        format!("{}-{}-{}", &d[..3], &d[3..5], &d[5..])
    } else {
        input.to_owned()
    }
}

/// Masks nine digits as `***-**-DDDD`.
#[must_use]
pub fn mask_ssn(input: &str) -> String {
    let d = digits(input);
    if d.len() == 9 {
        format!("***-**-{}", &d[5..])
    } else {
        input.to_owned()
    }
}

/// Formats an amount as US dollars with thousands separators and cents.
///
/// # Examples
///
/// ```
/// use formfield_validator::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-0.1), "-$0.10");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    dollars(amount, &format!("{:.2}", amount.abs()))
}

/// Formats a bound amount as US dollars with thousands separators and up to
/// three fraction digits, trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use formfield_validator::format::format_amount_bound;
///
/// assert_eq!(format_amount_bound(100.0), "$100");
/// assert_eq!(format_amount_bound(1234.5), "$1,234.5");
/// ```
#[must_use]
pub fn format_amount_bound(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    dollars(amount, trimmed)
}

/// Prefixes sign and `$` to an unsigned decimal string and groups its integer
/// part. Amounts that round to zero are unsigned.
fn dollars(amount: f64, unsigned: &str) -> String {
    let (whole, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(whole, fraction)| (whole, Some(fraction)));
    let nonzero = unsigned.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if amount < 0.0 && nonzero { "-" } else { "" };
    let whole = group_thousands(whole);
    fraction.map_or_else(
        || format!("{sign}${whole}"),
        |fraction| format!("{sign}${whole}.{fraction}"),
    )
}

fn group_thousands(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count with 1024-based units, at most two decimals.
///
/// # Examples
///
/// ```
/// use formfield_validator::format::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(25 * 1024 * 1024), "25 MB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Formats a date as `M/D/YYYY` without zero padding.
#[must_use]
pub fn format_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
