//! Core error types for the vortex workflow.
//!
//! This module provides [`ValidationError`], the per-field result of the
//! validator registry, and [`VortexError`], the crate-wide error enum used by
//! configuration loading and the command-line front end.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A short code identifying the class of a validation failure.
///
/// Codes let callers distinguish "required" from "too short" without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The field is empty after trimming.
    Required,
    /// The trimmed value is shorter than the field's minimum length.
    MinLength,
    /// The value is present but syntactically invalid.
    Invalid,
    /// No option was chosen in a select field.
    NotSelected,
    /// A mandatory checkbox was left unchecked.
    NotAccepted,
}

impl ErrorCode {
    /// Returns the code as a static string (e.g. `"min_length"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::Invalid => "invalid",
            Self::NotSelected => "not_selected",
            Self::NotAccepted => "not_accepted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single field validation failure.
///
/// # Examples
///
/// ```
/// use vortex_core::error::{ErrorCode, ValidationError};
///
/// let err = ValidationError::new("Message must be at least 10 characters", ErrorCode::MinLength)
///     .with_param("min", "10");
/// assert_eq!(err.code, ErrorCode::MinLength);
/// assert_eq!(err.params.get("min").map(String::as_str), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The human-readable error message shown next to the field.
    pub message: String,
    /// The class of failure.
    pub code: ErrorCode,
    /// Additional parameters providing context for the error message.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            code,
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the vortex crates.
///
/// Field-level problems never surface as a `VortexError` inside the form
/// controller; this type is for configuration, payload loading, and the
/// command-line front end, which maps each variant to a process exit code via
/// [`VortexError::exit_code`].
#[derive(Error, Debug)]
pub enum VortexError {
    // ── Validation ───────────────────────────────────────────────────

    /// A single field failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    /// One or more fields failed a whole-form validation pass.
    #[error("Form is invalid: {0} field(s) failed validation")]
    InvalidForm(usize),

    /// A field name outside the fixed set of contact form fields.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    // ── Submission ───────────────────────────────────────────────────

    /// A submission attempt is already in flight for this form.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The submission attempt failed.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl VortexError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `ValidationError`, `InvalidForm`, `UnknownField` -> 2
    /// - `SubmissionInFlight`, `SubmissionFailed` -> 3
    /// - `ConfigurationError` -> 78 (`EX_CONFIG`)
    /// - Everything else -> 1
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) | Self::InvalidForm(_) | Self::UnknownField(_) => 2,
            Self::SubmissionInFlight | Self::SubmissionFailed(_) => 3,
            Self::ConfigurationError(_) => 78,
            Self::SerializationError(_) | Self::IoError(_) => 1,
        }
    }
}

impl From<ValidationError> for VortexError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err)
    }
}

/// A convenience type alias for `Result<T, VortexError>`.
pub type VortexResult<T> = Result<T, VortexError>;
