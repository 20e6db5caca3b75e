//! Integration tests for formfield-validator.
//!
//! One binary; each module covers one concern across every field family.

mod common;
mod config;
mod messages;
mod presence;
mod scenarios;
