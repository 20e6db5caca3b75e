//! Core schema types and traits
//!
//! This module contains the building blocks every field family shares:
//!
//! - **Traits**: [`FieldSchema`], [`SchemaOptions`]
//! - **Issues**: [`ValidationIssue`], [`ValidationIssues`], [`PathSegment`]
//! - **Taxonomy**: [`IssueKind`]
//! - **Errors**: [`ConfigError`] for option loading
//! - **Time**: [`Clock`], [`SystemClock`], [`FixedClock`]
//!
//! # Architecture
//!
//! ## 1. Values in, values out
//!
//! Schemas take a `serde_json::Value` and return either the accepted value or
//! a non-empty list of issues. Nothing a caller passes in can make a schema
//! panic.
//!
//! ## 2. Options fixed at construction
//!
//! Messages that depend on options (a formatted minimum, a list of allowed
//! file types) are resolved once when the schema is built. Validation reads
//! nothing mutable except, for time-relative rules, the clock.
//!
//! ## 3. Structured issues
//!
//! ```rust,ignore
//! let issue = ValidationIssue::new("stateInvalid", "Please select a valid state")
//!     .at("state");
//! ```

pub mod category;
pub mod clock;
pub mod error;
pub mod traits;

pub use category::IssueKind;
pub use clock::{Clock, FixedClock, SharedClock, SystemClock, system_clock};
pub use error::{ConfigError, IssuePath, PathSegment, ValidationIssue, ValidationIssues};
pub use traits::{FieldSchema, SchemaOptions};
