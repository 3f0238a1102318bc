//! Settings for the contact workflow.
//!
//! This module provides the [`Settings`] struct, which holds every tunable of
//! the contact form (debounce quiet period, banner texts, simulated transport
//! behavior, logging) with defaults matching the production site.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Form-level behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Quiet period before an input event triggers validation, in milliseconds.
    pub debounce_ms: u64,
    /// Maximum length shown by the message character counter.
    pub message_max_length: usize,
    /// Label shown on the submit control while a submission is in flight.
    pub loading_label: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            message_max_length: 1000,
            loading_label: "Sending...".to_string(),
        }
    }
}

/// Status banner texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSettings {
    /// Shown when a submit is aborted because at least one field is invalid.
    pub correct_errors: String,
    /// Shown after a successful submission.
    pub success: String,
    /// Shown after a failed submission.
    pub failure: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            correct_errors: "Please correct the errors above.".to_string(),
            success: "Thank you for your message! We'll get back to you within 24 hours."
                .to_string(),
            failure: "Sorry, there was an error sending your message. \
                      Please try again or contact us directly."
                .to_string(),
        }
    }
}

/// Simulated transport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSettings {
    /// Artificial latency of each submission attempt, in milliseconds.
    pub latency_ms: u64,
    /// Probability in `[0, 1]` that an attempt fails. Zero disables failure
    /// injection.
    pub failure_rate: f64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            latency_ms: 2000,
            failure_rate: 0.0,
        }
    }
}

/// The complete set of workflow settings.
///
/// # Examples
///
/// ```
/// use vortex_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.form.debounce_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// An `EnvFilter` directive such as `"info"` or `"vortex_forms=debug"`.
    pub log_level: String,

    // ── Form ─────────────────────────────────────────────────────────

    /// Form-level behavior.
    pub form: FormSettings,

    /// Status banner texts.
    pub messages: MessageSettings,

    // ── Transport ────────────────────────────────────────────────────

    /// Simulated transport configuration.
    pub transport: TransportSettings,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Arbitrary additional settings.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            form: FormSettings::default(),
            messages: MessageSettings::default(),
            transport: TransportSettings::default(),
            extra: HashMap::new(),
        }
    }
}
