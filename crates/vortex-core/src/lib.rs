//! # vortex-core
//!
//! Core types, settings, and error types for the vortex contact workflow.
//! This crate has no async runtime dependency and provides the foundation
//! for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Shared syntax checkers (email, phone)
//! - [`settings`] - Workflow settings and defaults
//! - [`settings_loader`] - TOML/JSON/environment loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{ErrorCode, ValidationError, VortexError, VortexResult};
pub use settings::Settings;
