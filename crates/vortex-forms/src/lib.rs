//! # vortex-forms
//!
//! The contact form of the vortex site: field validators, debounced per-field
//! validation and the guarded submission workflow.
//!
//! ## Modules
//!
//! - [`fields`] - Field identifiers and raw control values
//! - [`widgets`] - Control kinds and their event triggers
//! - [`form`] - The form's values
//! - [`validation`] - The validator registry and accumulated errors
//! - [`state`] - Submission lifecycle
//! - [`debounce`] - Per-key debounced tasks
//! - [`transport`] - Submission transports
//! - [`view`] - The page surface the controller drives
//! - [`assist`] - Subject prompts and the message character counter
//! - [`controller`] - Event handling and the submission guard

pub mod assist;
pub mod controller;
pub mod debounce;
pub mod fields;
pub mod form;
pub mod state;
pub mod transport;
pub mod validation;
pub mod view;
pub mod widgets;

pub use assist::{CharCounter, CounterLevel, Subject};
pub use controller::{ControllerConfig, FormController, FormEvent, SubmitError, SubmitOutcome};
pub use debounce::Debouncer;
pub use fields::{FieldId, FieldValue};
pub use form::ContactForm;
pub use state::SubmissionState;
pub use transport::{SimulatedTransport, SubmitReceipt, SubmitTransport, TransportError};
pub use validation::{validate_field, validate_form, FormErrors};
pub use view::{FormView, StatusKind, StatusMessage};
pub use widgets::WidgetType;
