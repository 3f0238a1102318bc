//! A [`FormView`] that renders to the terminal.
//!
//! Field errors, banners and submit-control changes are written to stdout as
//! they happen and kept as lines so callers can inspect what was shown.

use std::sync::{Mutex, MutexGuard, PoisonError};

use vortex_forms::{CharCounter, FieldId, FormView, StatusKind, StatusMessage};

/// Label of the submit control before any submission.
pub const SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug)]
struct Console {
    submit_label: String,
    lines: Vec<String>,
}

/// Terminal rendition of the contact form page.
#[derive(Debug)]
pub struct ConsoleView {
    console: Mutex<Console>,
    echo: bool,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleView {
    /// Creates a view that prints every line to stdout.
    pub fn new() -> Self {
        Self::with_echo(true)
    }

    /// Creates a view that only keeps its lines.
    pub fn quiet() -> Self {
        Self::with_echo(false)
    }

    fn with_echo(echo: bool) -> Self {
        Self {
            console: Mutex::new(Console {
                submit_label: SUBMIT_LABEL.to_string(),
                lines: Vec::new(),
            }),
            echo,
        }
    }

    /// Returns every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.console().lines.clone()
    }

    fn console(&self) -> MutexGuard<'_, Console> {
        self.console.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.console().lines.push(line);
    }
}

impl FormView for ConsoleView {
    fn show_field_error(&self, field: FieldId, message: &str) {
        self.write(format!("  ✗ {}: {message}", field.label()));
    }

    fn clear_field_error(&self, field: FieldId) {
        tracing::trace!(field = %field, "field error cleared");
    }

    fn show_status(&self, status: &StatusMessage) {
        let marker = match status.kind {
            StatusKind::Success => "✓",
            StatusKind::Error => "!",
        };
        self.write(format!("{marker} {}", status.text));
    }

    fn clear_status(&self) {}

    fn submit_label(&self) -> String {
        self.console().submit_label.clone()
    }

    fn show_loading(&self, loading_label: &str) {
        self.console().submit_label = loading_label.to_string();
        self.write(format!("[{loading_label}]"));
    }

    fn hide_loading(&self, original_label: &str) {
        self.console().submit_label = original_label.to_string();
    }

    fn reset_fields(&self) {
        tracing::debug!("form reset");
    }

    fn update_char_counter(&self, counter: &CharCounter) {
        tracing::trace!(counter = %counter, "character counter");
    }
}
