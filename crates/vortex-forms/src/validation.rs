//! The validator registry.
//!
//! One pure rule per [`FieldId`], dispatched by an exhaustive match. The same
//! rules serve interactive per-field validation and the whole-form pass run at
//! submission time:
//!
//! 1. [`validate_field`] checks one value and returns the first failure.
//! 2. [`validate_form`] checks every field a submission must validate and
//!    accumulates failures rather than short-circuiting, so every invalid
//!    field can be marked at once.

use std::collections::BTreeMap;

use vortex_core::utils::syntax::{is_valid_email, is_valid_phone};
use vortex_core::{ErrorCode, ValidationError};

use crate::fields::{FieldId, FieldValue};
use crate::form::ContactForm;

/// Minimum trimmed length of the first and last name.
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum trimmed length of the message.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// Validates a single field value.
///
/// Text values are trimmed before emptiness and length checks. Lengths count
/// characters, not bytes.
///
/// # Examples
///
/// ```
/// use vortex_core::ErrorCode;
/// use vortex_forms::fields::{FieldId, FieldValue};
/// use vortex_forms::validation::validate_field;
///
/// let err = validate_field(FieldId::FirstName, &FieldValue::from(" A ")).unwrap_err();
/// assert_eq!(err.code, ErrorCode::MinLength);
/// assert!(validate_field(FieldId::Phone, &FieldValue::from("")).is_ok());
/// ```
pub fn validate_field(field: FieldId, value: &FieldValue) -> Result<(), ValidationError> {
    match field {
        FieldId::FirstName | FieldId::LastName => {
            min_length(field.label(), value.as_text(), NAME_MIN_LENGTH)
        }
        FieldId::Email => {
            let email = value.as_text().trim();
            if email.is_empty() {
                Err(required(field.label()))
            } else if is_valid_email(email) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "Please enter a valid email address",
                    ErrorCode::Invalid,
                ))
            }
        }
        FieldId::Phone => {
            let phone = value.as_text().trim();
            if phone.is_empty() || is_valid_phone(phone) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "Please enter a valid phone number",
                    ErrorCode::Invalid,
                ))
            }
        }
        FieldId::Subject => {
            if value.as_text().is_empty() {
                Err(ValidationError::new(
                    "Please select a subject",
                    ErrorCode::NotSelected,
                ))
            } else {
                Ok(())
            }
        }
        FieldId::Message => min_length(field.label(), value.as_text(), MESSAGE_MIN_LENGTH),
        FieldId::Privacy => {
            if value.is_checked() {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "You must agree to the Privacy Policy and Terms of Service",
                    ErrorCode::NotAccepted,
                ))
            }
        }
    }
}

/// Validates every field a submission of `form` must validate.
///
/// Errors accumulate across all fields (no short-circuiting).
pub fn validate_form(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in form.fields_to_validate() {
        if let Err(err) = validate_field(field, &form.value(field)) {
            errors.insert(field, err);
        }
    }
    errors
}

fn required(label: &str) -> ValidationError {
    ValidationError::new(format!("{label} is required"), ErrorCode::Required)
}

fn min_length(label: &str, raw: &str, min: usize) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(required(label));
    }
    if value.chars().count() < min {
        return Err(ValidationError::new(
            format!("{label} must be at least {min} characters"),
            ErrorCode::MinLength,
        )
        .with_param("min", min.to_string()));
    }
    Ok(())
}

/// Accumulated per-field errors of a whole-form validation pass.
///
/// Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl FormErrors {
    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: FieldId, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Removes the error for `field`, returning it if present.
    pub fn remove(&mut self, field: FieldId) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    /// Returns the error recorded for `field`.
    pub fn get(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Returns `true` if `field` has an error.
    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns the failing fields in form order.
    pub fn fields(&self) -> Vec<FieldId> {
        self.errors.keys().copied().collect()
    }

    /// Iterates over `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::from(value)
    }

    fn code(field: FieldId, value: &FieldValue) -> Option<ErrorCode> {
        validate_field(field, value).err().map(|err| err.code)
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            subject: "consultation".into(),
            message: "I would like to talk about a migration.".into(),
            privacy: true,
        }
    }

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn test_names_required_short_and_valid() {
        for field in [FieldId::FirstName, FieldId::LastName] {
            assert_eq!(code(field, &text("")), Some(ErrorCode::Required));
            assert_eq!(code(field, &text("   ")), Some(ErrorCode::Required));
            assert_eq!(code(field, &text(" J ")), Some(ErrorCode::MinLength));
            assert_eq!(code(field, &text("Jo")), None);
        }
    }

    #[test]
    fn test_name_messages() {
        let err = validate_field(FieldId::FirstName, &text("")).unwrap_err();
        assert_eq!(err.message, "First name is required");
        let err = validate_field(FieldId::LastName, &text("L")).unwrap_err();
        assert_eq!(err.message, "Last name must be at least 2 characters");
        assert_eq!(err.params.get("min").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert_eq!(code(FieldId::FirstName, &text("Łu")), None);
        assert_eq!(code(FieldId::FirstName, &text("Ł")), Some(ErrorCode::MinLength));
    }

    // ── Email ───────────────────────────────────────────────────────

    #[test]
    fn test_email_rules() {
        let err = validate_field(FieldId::Email, &text("  ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Required);
        assert_eq!(err.message, "Email address is required");

        let err = validate_field(FieldId::Email, &text("ada@")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Invalid);
        assert_eq!(err.message, "Please enter a valid email address");

        assert_eq!(code(FieldId::Email, &text(" ada@example.com ")), None);
    }

    // ── Phone ───────────────────────────────────────────────────────

    #[test]
    fn test_phone_empty_is_always_valid() {
        assert_eq!(code(FieldId::Phone, &text("")), None);
        assert_eq!(code(FieldId::Phone, &text("    ")), None);
    }

    #[test]
    fn test_phone_invalid_and_valid() {
        let err = validate_field(FieldId::Phone, &text("call me")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Invalid);
        assert_eq!(err.message, "Please enter a valid phone number");
        assert_eq!(code(FieldId::Phone, &text(" +1 (555) 010-9999 ")), None);
    }

    // ── Subject / message / privacy ─────────────────────────────────

    #[test]
    fn test_subject_requires_selection() {
        let err = validate_field(FieldId::Subject, &text("")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotSelected);
        assert_eq!(err.message, "Please select a subject");
        assert_eq!(code(FieldId::Subject, &text("support")), None);
    }

    #[test]
    fn test_message_rules() {
        let err = validate_field(FieldId::Message, &text("")).unwrap_err();
        assert_eq!(err.message, "Message is required");
        let err = validate_field(FieldId::Message, &text("  too short ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MinLength);
        assert_eq!(err.message, "Message must be at least 10 characters");
        assert_eq!(code(FieldId::Message, &text("0123456789")), None);
    }

    #[test]
    fn test_privacy_must_be_checked() {
        let err = validate_field(FieldId::Privacy, &FieldValue::Checked(false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAccepted);
        assert_eq!(
            err.message,
            "You must agree to the Privacy Policy and Terms of Service"
        );
        assert_eq!(code(FieldId::Privacy, &FieldValue::Checked(true)), None);
        assert_eq!(code(FieldId::Privacy, &text("on")), None);
    }

    #[test]
    fn test_validation_is_pure() {
        let value = text("x");
        let first = validate_field(FieldId::Message, &value);
        let second = validate_field(FieldId::Message, &value);
        assert_eq!(first, second);
    }

    // ── Whole form ──────────────────────────────────────────────────

    #[test]
    fn test_validate_form_valid() {
        assert!(validate_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_validate_form_accumulates_every_failure() {
        let form = ContactForm {
            first_name: "A".into(),
            email: "nope".into(),
            ..valid_form()
        };
        let errors = validate_form(&form);
        assert_eq!(errors.fields(), vec![FieldId::FirstName, FieldId::Email]);
        assert_eq!(errors.get(FieldId::Email).unwrap().code, ErrorCode::Invalid);
    }

    #[test]
    fn test_validate_form_empty_form() {
        let errors = validate_form(&ContactForm::default());
        assert_eq!(
            errors.fields(),
            vec![
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Subject,
                FieldId::Message,
                FieldId::Privacy,
            ]
        );
    }

    #[test]
    fn test_validate_form_checks_phone_only_when_present() {
        let form = ContactForm {
            phone: "abc".into(),
            ..valid_form()
        };
        let errors = validate_form(&form);
        assert_eq!(errors.fields(), vec![FieldId::Phone]);
    }

    #[test]
    fn test_form_errors_operations() {
        let mut errors = FormErrors::default();
        errors.insert(
            FieldId::Message,
            ValidationError::new("Message is required", ErrorCode::Required),
        );
        assert!(errors.contains(FieldId::Message));
        assert_eq!(errors.len(), 1);
        assert!(errors.remove(FieldId::Message).is_some());
        assert!(errors.is_empty());
    }
}
