//! Contact form field identifiers and values.
//!
//! The set of fields is closed: [`FieldId`] enumerates all seven controls of
//! the contact form, and every per-field rule in the crate matches on it
//! exhaustively. Adding or removing a field is a compile-time change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vortex_core::VortexError;

use crate::widgets::WidgetType;

/// Identifies one control of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email address.
    Email,
    /// Optional phone number.
    Phone,
    /// Inquiry subject (select).
    Subject,
    /// Free-form message.
    Message,
    /// Privacy policy consent (checkbox).
    Privacy,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
        Self::Privacy,
    ];

    /// Fields that must always pass validation before a submission.
    ///
    /// `Privacy` is checked unconditionally as well, and `Phone` only when it
    /// has a value; see [`ContactForm::fields_to_validate`](crate::form::ContactForm::fields_to_validate).
    pub const REQUIRED: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Subject,
        Self::Message,
    ];

    /// Returns the control's `name` attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Privacy => "privacy",
        }
    }

    /// Returns the id of the field's error-message region (e.g. `emailError`).
    pub fn error_key(self) -> String {
        format!("{}Error", self.name())
    }

    /// Returns a human-readable label used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Privacy => "Privacy consent",
        }
    }

    /// Returns the widget rendering this field.
    pub const fn widget(self) -> WidgetType {
        match self {
            Self::FirstName | Self::LastName => WidgetType::TextInput,
            Self::Email => WidgetType::EmailInput,
            Self::Phone => WidgetType::TelInput,
            Self::Subject => WidgetType::Select,
            Self::Message => WidgetType::Textarea,
            Self::Privacy => WidgetType::CheckboxInput,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = VortexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| VortexError::UnknownField(s.to_string()))
    }
}

/// The raw value of a control as captured from the form.
///
/// Text inputs, textareas and selects carry text; the checkbox carries its
/// checked state. The two representations convert into each other the way
/// submitted form data does: a checked box reads as the text `"on"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text content or selected option.
    Text(String),
    /// Checkbox state.
    Checked(bool),
}

impl FieldValue {
    /// Returns the value as text. A checked box reads as `"on"`, an unchecked
    /// one as the empty string.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Checked(true) => "on",
            Self::Checked(false) => "",
        }
    }

    /// Returns the value as a checkbox state. Text reads as checked only when
    /// it is exactly `"on"`.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Text(text) => text == "on",
            Self::Checked(checked) => *checked,
        }
    }

    /// Returns `true` if the value is empty after trimming (or unchecked).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Checked(checked) => !checked,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}
