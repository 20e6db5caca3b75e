//! Prelude module for convenient imports.
//!
//! Provides a single `use formfield_validator::prelude::*;` import that brings
//! in the schema traits, every factory with its options, the result adapter,
//! the standalone validators and the formatters.
//!
//! # Examples
//!
//! ```
//! use formfield_validator::prelude::*;
//! use serde_json::json;
//!
//! let zip = create_text_schema(TextSchemaOptions::default().min(5).max(10));
//! assert!(zip.safe_check(&json!("12345")).is_success());
//! assert_eq!(format_ssn("123456789"), "123-45-6789");
//! ```

// ============================================================================
// FOUNDATION: Traits, issues, clock
// ============================================================================

pub use crate::foundation::{
    Clock, ConfigError, FieldSchema, FixedClock, IssueKind, PathSegment, SchemaOptions,
    SharedClock, SystemClock, ValidationIssue, ValidationIssues, system_clock,
};

// ============================================================================
// MESSAGES AND RESULTS
// ============================================================================

pub use crate::message::{MessageOverrides, Rule};
pub use crate::patterns::Pattern;
pub use crate::result::{ValidationResult, flatten};

// ============================================================================
// SCHEMAS: Factories, options, outputs
// ============================================================================

pub use crate::schemas::{
    Address, AddressKind, AddressSchema, AddressSchemaOptions, CurrencySchema,
    CurrencySchemaOptions, DateSchema, DateSchemaOptions, EmailSchema, EmailSchemaOptions,
    FileInfo, FileSchema, FileSchemaOptions, FileUpload, FullName, FullNameSchema,
    FullNameSchemaOptions, MemorableDateSchema, MemorableDateSchemaOptions, NameSchema,
    NameSchemaOptions, PhoneSchema, PhoneSchemaOptions, SsnSchema, SsnSchemaOptions, TextSchema,
    TextSchemaOptions, create_address_schema, create_currency_schema, create_date_schema,
    create_email_schema, create_file_schema, create_full_name_schema,
    create_memorable_date_schema, create_name_schema, create_phone_schema, create_ssn_schema,
    create_text_schema,
};

// ============================================================================
// STANDALONE: Validators, formatters, utilities
// ============================================================================

pub use crate::format::{
    format_amount_bound, format_currency, format_file_size, format_phone_number, format_ssn,
    format_us_date, mask_ssn,
};
pub use crate::utils::{Debouncer, is_empty_value, message_or_default};
pub use crate::validators::{
    parse_date, validate_date_in_future, validate_date_in_past, validate_minimum_age,
    validate_phone_number, validate_ssn, validate_va_file_number, validate_zip_code,
};
