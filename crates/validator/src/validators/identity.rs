//! SSN and VA file number predicates.

use crate::patterns::Pattern;

/// Nine SSN digits split into area, group and serial.
///
/// Expects input already matched by an SSN pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsnParts<'a> {
    pub area: &'a str,
    pub group: &'a str,
    pub serial: &'a str,
}

impl<'a> SsnParts<'a> {
    /// Splits a dashed or undashed SSN. `None` unless it has exactly nine
    /// ASCII digits in the `3-2-4` layout.
    #[must_use]
    pub fn split(input: &'a str) -> Option<Self> {
        if !Pattern::SsnFlexible.is_match(input) {
            return None;
        }
        let area = &input[..3];
        let rest = input[3..].strip_prefix('-').unwrap_or(&input[3..]);
        let group = &rest[..2];
        let serial = rest[2..].strip_prefix('-').unwrap_or(&rest[2..]);
        Some(Self { area, group, serial })
    }

    /// Area is not `000`.
    #[must_use]
    pub fn area_assigned(&self) -> bool {
        self.area != "000"
    }

    /// Group is not `00`.
    #[must_use]
    pub fn group_assigned(&self) -> bool {
        self.group != "00"
    }

    /// Serial is not `0000`.
    #[must_use]
    pub fn serial_assigned(&self) -> bool {
        self.serial != "0000"
    }

    /// First digit is not `9`, which is reserved for ITINs.
    #[must_use]
    pub fn not_itin(&self) -> bool {
        !self.area.starts_with('9')
    }

    /// All structural rules hold.
    #[must_use]
    pub fn is_structurally_valid(&self) -> bool {
        self.area_assigned() && self.group_assigned() && self.serial_assigned() && self.not_itin()
    }
}

/// Returns `true` for a structurally valid SSN, dashes optional.
///
/// # Examples
///
/// ```
/// use formfield_validator::validators::validate_ssn;
///
/// assert!(validate_ssn("123-45-6789"));
/// assert!(validate_ssn("123456789"));
/// assert!(!validate_ssn("000-45-6789"));
/// assert!(!validate_ssn("912-45-6789"));
/// ```
#[must_use]
pub fn validate_ssn(input: &str) -> bool {
    SsnParts::split(input).is_some_and(|parts| parts.is_structurally_valid())
}

/// Returns `true` for an optional `C`/`c` followed by 7 to 9 digits.
#[must_use]
pub fn validate_va_file_number(input: &str) -> bool {
    Pattern::VaFileNumber.is_match(input)
}
