//! Standalone validators
//!
//! Lightweight boolean predicates for callers that do not need a full
//! schema, plus the lenient date parser the date schema shares.
//!
//! # Examples
//!
//! ```
//! use formfield_validator::validators::*;
//!
//! assert!(validate_ssn("123-45-6789"));
//! assert!(validate_zip_code("12345-6789"));
//! assert!(validate_va_file_number("C1234567"));
//! ```

pub mod contact;
pub mod date;
pub mod identity;

pub use contact::{validate_phone_number, validate_zip_code};
pub use date::{
    parse_date, validate_date_in_future, validate_date_in_future_at, validate_date_in_past,
    validate_date_in_past_at, validate_minimum_age, validate_minimum_age_at,
};
pub use identity::{SsnParts, validate_ssn, validate_va_file_number};
