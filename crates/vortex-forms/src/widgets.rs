//! Widget kinds of the contact form controls.
//!
//! The widget decides which DOM events drive validation: text-like widgets
//! validate on blur and, debounced, on input; selects and checkboxes validate
//! as soon as they change.

use std::fmt;

/// Enumerates the widgets used by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<input type="tel">`.
    TelInput,
    /// `<textarea>`.
    Textarea,
    /// `<select>`.
    Select,
    /// `<input type="checkbox">`.
    CheckboxInput,
}

impl WidgetType {
    /// Returns the HTML `type` attribute (or tag name for non-inputs).
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::TextInput => "text",
            Self::EmailInput => "email",
            Self::TelInput => "tel",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::CheckboxInput => "checkbox",
        }
    }

    /// Returns `true` for widgets that receive keystrokes.
    ///
    /// These are validated on every input event after a quiet period.
    pub const fn is_text_like(self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::EmailInput | Self::TelInput | Self::Textarea
        )
    }

    /// Returns `true` for widgets validated immediately on change.
    pub const fn validates_on_change(self) -> bool {
        matches!(self, Self::Select | Self::CheckboxInput)
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::EmailInput => "EmailInput",
            Self::TelInput => "TelInput",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::CheckboxInput => "CheckboxInput",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_like_widgets() {
        assert!(WidgetType::TextInput.is_text_like());
        assert!(WidgetType::EmailInput.is_text_like());
        assert!(WidgetType::TelInput.is_text_like());
        assert!(WidgetType::Textarea.is_text_like());
        assert!(!WidgetType::Select.is_text_like());
        assert!(!WidgetType::CheckboxInput.is_text_like());
    }

    #[test]
    fn test_change_widgets() {
        assert!(WidgetType::Select.validates_on_change());
        assert!(WidgetType::CheckboxInput.validates_on_change());
        assert!(!WidgetType::Textarea.validates_on_change());
    }

    #[test]
    fn test_input_type_and_display() {
        assert_eq!(WidgetType::TelInput.input_type(), "tel");
        assert_eq!(WidgetType::CheckboxInput.to_string(), "CheckboxInput");
    }
}
