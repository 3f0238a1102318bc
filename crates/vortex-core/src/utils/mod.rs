//! Utility functions shared by the validators.
//!
//! - [`syntax`]: email and phone syntax checkers.

pub mod syntax;

pub use syntax::{is_valid_email, is_valid_phone};
