//! The contact form's values.
//!
//! [`ContactForm`] holds the current value of every control. The controller
//! updates it from field events, clones it as the submission snapshot, and
//! resets it after a successful submission. It serializes with the same
//! camelCase keys the HTML form uses, so a payload file and the form data
//! share one shape.

use serde::{Deserialize, Serialize};

use crate::fields::{FieldId, FieldValue};

/// Current values of the seven contact form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
}

impl ContactForm {
    /// Returns the value of one field.
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldId::LastName => FieldValue::Text(self.last_name.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Phone => FieldValue::Text(self.phone.clone()),
            FieldId::Subject => FieldValue::Text(self.subject.clone()),
            FieldId::Message => FieldValue::Text(self.message.clone()),
            FieldId::Privacy => FieldValue::Checked(self.privacy),
        }
    }

    /// Sets the value of one field.
    ///
    /// Values are stored as captured, untrimmed; trimming is the validators'
    /// job.
    pub fn set(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        let value = value.into();
        match field {
            FieldId::FirstName => self.first_name = value.as_text().to_string(),
            FieldId::LastName => self.last_name = value.as_text().to_string(),
            FieldId::Email => self.email = value.as_text().to_string(),
            FieldId::Phone => self.phone = value.as_text().to_string(),
            FieldId::Subject => self.subject = value.as_text().to_string(),
            FieldId::Message => self.message = value.as_text().to_string(),
            FieldId::Privacy => self.privacy = value.is_checked(),
        }
    }

    /// Clears every text field and unchecks the privacy box.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the fields a submission must validate, in form order.
    ///
    /// Required fields and `privacy` are always included; `phone` only when
    /// it is non-empty.
    pub fn fields_to_validate(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| *field != FieldId::Phone || !self.phone.is_empty())
            .collect()
    }
}
