//! # formfield-validator
//!
//! Declarative validation schemas for common form fields: text, email,
//! phone, SSN, dates, currency, names, addresses and file uploads.
//!
//! ## Quick Start
//!
//! ```
//! use formfield_validator::prelude::*;
//! use serde_json::json;
//!
//! let ssn = create_ssn_schema(SsnSchemaOptions::default());
//! assert!(ssn.safe_check(&json!("123-45-6789")).is_success());
//!
//! let result = ssn.safe_check(&json!("123456789"));
//! assert_eq!(result.first_message(), Some("Please enter a valid Social Security number"));
//! ```
//!
//! ## Building Schemas
//!
//! Each family has an options struct and a `create_*_schema` factory. Options
//! can be built in Rust or loaded from camelCase JSON through
//! [`SchemaOptions`](foundation::SchemaOptions):
//!
//! ```
//! use formfield_validator::prelude::*;
//! use serde_json::json;
//!
//! let options = CurrencySchemaOptions::from_json(&json!({
//!     "min": 100,
//!     "messages": {"min": "Please enter at least $100"}
//! }))
//! .unwrap();
//! let amount = create_currency_schema(options);
//!
//! assert_eq!(amount.safe_check_str("$99").first_message(), Some("Please enter at least $100"));
//! ```
//!
//! ## Reading Issues
//!
//! Failures are lists of [`ValidationIssue`](foundation::ValidationIssue)s
//! with a rule code, a resolved message and a path into object-shaped
//! values. [`flatten`](result::flatten) reduces them to one message per path.
//!
//! ## Also Included
//!
//! - **Validators**: boolean predicates such as
//!   [`validate_ssn`](validators::validate_ssn) and
//!   [`validate_minimum_age`](validators::validate_minimum_age)
//! - **Formatters**: [`format_phone_number`](format::format_phone_number),
//!   [`mask_ssn`](format::mask_ssn), [`format_currency`](format::format_currency)
//! - **Patterns**: the shared [`Pattern`](patterns::Pattern) catalog and
//!   state tables

// ValidationIssue carries a path, a message and params; boxing it would add
// an allocation to every rejected candidate.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod format;
pub mod foundation;
pub mod json;
pub mod message;
pub mod patterns;
pub mod prelude;
pub mod result;
pub mod schemas;
pub mod utils;
pub mod validators;
