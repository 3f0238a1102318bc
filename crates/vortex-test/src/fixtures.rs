//! Canned forms, settings and a wired-up controller.

use std::sync::Arc;

use vortex_core::Settings;
use vortex_forms::{ContactForm, FieldId, FormController, SubmitTransport};

use crate::recording_view::RecordingView;

/// A form that passes every validator.
pub fn valid_form() -> ContactForm {
    ContactForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        subject: "cloud".to_string(),
        message: "We would like to move our analytics stack to the cloud.".to_string(),
        privacy: true,
    }
}

/// Builder for test settings.
///
/// Starts from [`Settings::default()`] with zero transport latency and allows
/// selective modification.
#[derive(Debug, Clone)]
pub struct SettingsOverride {
    settings: Settings,
}

impl Default for SettingsOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsOverride {
    /// Creates a builder starting from default settings with an instant
    /// transport.
    pub fn new() -> Self {
        let mut settings = Settings::default();
        settings.transport.latency_ms = 0;
        Self { settings }
    }

    /// Sets the debounce quiet period.
    #[must_use]
    pub const fn debounce_ms(mut self, ms: u64) -> Self {
        self.settings.form.debounce_ms = ms;
        self
    }

    /// Sets the submit control's loading label.
    #[must_use]
    pub fn loading_label(mut self, label: &str) -> Self {
        self.settings.form.loading_label = label.to_string();
        self
    }

    /// Sets the message counter maximum.
    #[must_use]
    pub const fn message_max_length(mut self, max: usize) -> Self {
        self.settings.form.message_max_length = max;
        self
    }

    /// Sets the simulated transport latency.
    #[must_use]
    pub const fn latency_ms(mut self, ms: u64) -> Self {
        self.settings.transport.latency_ms = ms;
        self
    }

    /// Sets the simulated transport failure rate.
    #[must_use]
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.settings.transport.failure_rate = rate;
        self
    }

    /// Returns the built settings.
    pub fn build(self) -> Settings {
        self.settings
    }
}

/// Settings used by [`FormHarness::new`].
pub fn test_settings() -> Settings {
    SettingsOverride::new().build()
}

/// A controller wired to a [`RecordingView`] and a test transport.
#[derive(Debug)]
pub struct FormHarness<T> {
    pub controller: FormController,
    pub view: RecordingView,
    pub transport: Arc<T>,
}

impl<T> FormHarness<T>
where
    T: SubmitTransport + 'static,
{
    /// Wires `transport` with [`test_settings`].
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, &test_settings())
    }

    /// Wires `transport` with the given settings.
    pub fn with_settings(transport: T, settings: &Settings) -> Self {
        let view = RecordingView::new();
        let transport = Arc::new(transport);
        let controller = FormController::new(
            Arc::new(view.clone()),
            Arc::clone(&transport) as Arc<dyn SubmitTransport>,
            settings,
        );
        Self {
            controller,
            view,
            transport,
        }
    }

    /// Enters every value of `form` through change events.
    pub fn fill(&self, form: &ContactForm) {
        for field in FieldId::ALL {
            self.controller.change(field, form.value(field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vortex_forms::validate_form;

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_settings_override() {
        let settings = SettingsOverride::new()
            .debounce_ms(50)
            .loading_label("Wait")
            .failure_rate(0.25)
            .build();
        assert_eq!(settings.form.debounce_ms, 50);
        assert_eq!(settings.form.loading_label, "Wait");
        assert_eq!(settings.transport.latency_ms, 0);
        assert!((settings.transport.failure_rate - 0.25).abs() < f64::EPSILON);
    }
}
