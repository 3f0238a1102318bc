//! # vortex
//!
//! Contact form validation and guarded submission.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `vortex` to get everything, or on individual crates for
//! finer-grained control.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vortex::prelude::*;
//!
//! # struct Page;
//! # impl FormView for Page {
//! #     fn show_field_error(&self, _: FieldId, _: &str) {}
//! #     fn clear_field_error(&self, _: FieldId) {}
//! #     fn show_status(&self, _: &StatusMessage) {}
//! #     fn clear_status(&self) {}
//! #     fn submit_label(&self) -> String { "Send Message".into() }
//! #     fn show_loading(&self, _: &str) {}
//! #     fn hide_loading(&self, _: &str) {}
//! #     fn reset_fields(&self) {}
//! # }
//! # async fn run() {
//! let settings = Settings::default();
//! let transport = SimulatedTransport::new(Duration::from_millis(2000));
//! let controller = FormController::new(Arc::new(Page), Arc::new(transport), &settings);
//!
//! controller.input(FieldId::Email, "ada@example.com");
//! controller.blur(FieldId::Email);
//! let outcome = controller.submit().await;
//! # }
//! ```

/// Settings, errors, logging, and the shared syntax checkers.
pub use vortex_core as core;

/// Validators, the debouncer, transports, and the form controller.
#[cfg(feature = "forms")]
pub use vortex_forms as forms;

/// The `vortex` command-line front end.
#[cfg(feature = "cli")]
pub use vortex_cli as cli;

/// Recording view, stub transports, and fixtures for tests.
#[cfg(feature = "testing")]
pub use vortex_test as test;

/// The types most applications need.
pub mod prelude {
    pub use vortex_core::{ErrorCode, Settings, ValidationError, VortexError, VortexResult};

    #[cfg(feature = "forms")]
    pub use vortex_forms::{
        ContactForm, FieldId, FieldValue, FormController, FormEvent, FormView,
        SimulatedTransport, StatusMessage, SubmissionState, SubmitOutcome, SubmitTransport,
    };
}
