//! # vortex-test
//!
//! Testing utilities for the vortex contact form. Provides an in-memory page
//! that records every update, transports with scripted outcomes, canned forms
//! and a settings override builder.

pub mod fixtures;
pub mod recording_view;
pub mod transports;

pub use fixtures::{test_settings, valid_form, FormHarness, SettingsOverride};
pub use recording_view::{RecordingView, ViewEvent};
pub use transports::{Behavior, GatedTransport, StubTransport};
