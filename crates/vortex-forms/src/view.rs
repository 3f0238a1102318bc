//! The page surface the controller drives.
//!
//! [`FormView`] is everything the controller needs from the page: per-field
//! error regions, a status banner, the submit control, and a full reset.
//! Implementations use interior mutability and must be shareable across tasks
//! because debounced validations report from spawned tasks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assist::CharCounter;
use crate::fields::FieldId;

/// The tone of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A form-level status banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    /// Creates a success banner.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Creates an error banner.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The page elements of one contact form.
pub trait FormView: Send + Sync {
    /// Shows `message` in the field's error region and marks its group
    /// errored.
    fn show_field_error(&self, field: FieldId, message: &str);

    /// Empties the field's error region and unmarks its group.
    fn clear_field_error(&self, field: FieldId);

    /// Shows the status banner.
    fn show_status(&self, status: &StatusMessage);

    /// Hides the status banner.
    fn clear_status(&self);

    /// Returns the submit control's current label.
    fn submit_label(&self) -> String;

    /// Disables the submit control and shows `loading_label` on it.
    fn show_loading(&self, loading_label: &str);

    /// Re-enables the submit control and restores `original_label`.
    fn hide_loading(&self, original_label: &str);

    /// Empties every control and unchecks the checkbox.
    fn reset_fields(&self);

    /// Replaces the message placeholder.
    fn set_message_placeholder(&self, _prompt: &str) {}

    /// Refreshes the message character counter.
    fn update_char_counter(&self, _counter: &CharCounter) {}
}
