//! In-memory page for asserting on controller output.
//!
//! [`RecordingView`] implements [`FormView`] by keeping the state a browser
//! page would show (field error regions, the status banner, the submit
//! control, the message placeholder and counter) plus an ordered log of every
//! call it received.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vortex_forms::{FieldId, FormView};
//! use vortex_test::recording_view::{RecordingView, ViewEvent};
//!
//! let view = RecordingView::new();
//! let shared: Arc<dyn FormView> = Arc::new(view.clone());
//! shared.show_field_error(FieldId::Email, "Email is required");
//!
//! assert_eq!(view.field_error(FieldId::Email).as_deref(), Some("Email is required"));
//! assert_eq!(view.events().len(), 1);
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use vortex_forms::{CharCounter, FieldId, FormView, StatusMessage};

/// Label the submit control starts with.
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// One call received by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    FieldErrorShown { field: FieldId, message: String },
    FieldErrorCleared(FieldId),
    StatusShown(StatusMessage),
    StatusCleared,
    LoadingShown(String),
    LoadingHidden(String),
    FieldsReset,
    PlaceholderSet(String),
    CounterUpdated(CharCounter),
}

#[derive(Debug)]
struct Page {
    field_errors: BTreeMap<FieldId, String>,
    status: Option<StatusMessage>,
    submit_label: String,
    submit_disabled: bool,
    placeholder: Option<String>,
    counter: Option<CharCounter>,
    events: Vec<ViewEvent>,
}

/// A [`FormView`] that records instead of rendering.
///
/// Thread-safe via `Arc<Mutex<...>>`; clones share the same page.
#[derive(Debug, Clone)]
pub struct RecordingView {
    page: Arc<Mutex<Page>>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    /// Creates a page with an enabled submit control labelled
    /// [`DEFAULT_SUBMIT_LABEL`].
    pub fn new() -> Self {
        Self::with_submit_label(DEFAULT_SUBMIT_LABEL)
    }

    /// Creates a page whose submit control carries `label`.
    pub fn with_submit_label(label: &str) -> Self {
        Self {
            page: Arc::new(Mutex::new(Page {
                field_errors: BTreeMap::new(),
                status: None,
                submit_label: label.to_string(),
                submit_disabled: false,
                placeholder: None,
                counter: None,
                events: Vec::new(),
            })),
        }
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().expect("RecordingView lock poisoned")
    }

    /// Returns the message shown in the field's error region.
    pub fn field_error(&self, field: FieldId) -> Option<String> {
        self.page().field_errors.get(&field).cloned()
    }

    /// Returns `true` if the field's group is marked errored.
    pub fn has_error(&self, field: FieldId) -> bool {
        self.page().field_errors.contains_key(&field)
    }

    /// Returns every field currently marked errored, in form order.
    pub fn errored_fields(&self) -> Vec<FieldId> {
        self.page().field_errors.keys().copied().collect()
    }

    /// Returns the banner currently shown.
    pub fn status(&self) -> Option<StatusMessage> {
        self.page().status.clone()
    }

    /// Returns the submit control's label.
    pub fn submit_text(&self) -> String {
        self.page().submit_label.clone()
    }

    /// Returns `true` while the submit control is disabled.
    pub fn submit_disabled(&self) -> bool {
        self.page().submit_disabled
    }

    /// Returns the message placeholder, if one was set.
    pub fn placeholder(&self) -> Option<String> {
        self.page().placeholder.clone()
    }

    /// Returns the last character counter shown.
    pub fn counter(&self) -> Option<CharCounter> {
        self.page().counter
    }

    /// Returns every call received, oldest first.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.page().events.clone()
    }

    /// Returns how many received calls match `predicate`.
    pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
        self.page().events.iter().filter(|event| predicate(event)).count()
    }

    /// Forgets the recorded calls, keeping the page state.
    pub fn clear_events(&self) {
        self.page().events.clear();
    }
}

impl FormView for RecordingView {
    fn show_field_error(&self, field: FieldId, message: &str) {
        let mut page = self.page();
        page.field_errors.insert(field, message.to_string());
        page.events.push(ViewEvent::FieldErrorShown {
            field,
            message: message.to_string(),
        });
    }

    fn clear_field_error(&self, field: FieldId) {
        let mut page = self.page();
        page.field_errors.remove(&field);
        page.events.push(ViewEvent::FieldErrorCleared(field));
    }

    fn show_status(&self, status: &StatusMessage) {
        let mut page = self.page();
        page.status = Some(status.clone());
        page.events.push(ViewEvent::StatusShown(status.clone()));
    }

    fn clear_status(&self) {
        let mut page = self.page();
        page.status = None;
        page.events.push(ViewEvent::StatusCleared);
    }

    fn submit_label(&self) -> String {
        self.submit_text()
    }

    fn show_loading(&self, loading_label: &str) {
        let mut page = self.page();
        page.submit_disabled = true;
        page.submit_label = loading_label.to_string();
        page.events.push(ViewEvent::LoadingShown(loading_label.to_string()));
    }

    fn hide_loading(&self, original_label: &str) {
        let mut page = self.page();
        page.submit_disabled = false;
        page.submit_label = original_label.to_string();
        page.events.push(ViewEvent::LoadingHidden(original_label.to_string()));
    }

    fn reset_fields(&self) {
        self.page().events.push(ViewEvent::FieldsReset);
    }

    fn set_message_placeholder(&self, prompt: &str) {
        let mut page = self.page();
        page.placeholder = Some(prompt.to_string());
        page.events.push(ViewEvent::PlaceholderSet(prompt.to_string()));
    }

    fn update_char_counter(&self, counter: &CharCounter) {
        let mut page = self.page();
        page.counter = Some(*counter);
        page.events.push(ViewEvent::CounterUpdated(*counter));
    }
}
