//! Phone and ZIP code predicates.

use crate::patterns::Pattern;

/// Returns `true` for a formatted US number or exactly ten digits.
///
/// # Examples
///
/// ```
/// use formfield_validator::validators::validate_phone_number;
///
/// assert!(validate_phone_number("(555) 123-4567"));
/// assert!(validate_phone_number("5551234567"));
/// assert!(!validate_phone_number("555-1234"));
/// ```
#[must_use]
pub fn validate_phone_number(input: &str) -> bool {
    Pattern::UsPhone.is_match(input) || (input.len() == 10 && input.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns `true` for a ZIP or ZIP+4 code.
#[must_use]
pub fn validate_zip_code(input: &str) -> bool {
    Pattern::ZipPlus4.is_match(input)
}
