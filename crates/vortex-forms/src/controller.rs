//! The form controller: event handling and the submission guard.
//!
//! [`FormController`] owns the form's values, its current error state and its
//! [`SubmissionState`], and derives every page update from them through a
//! [`FormView`]. Field events validate through the registry in
//! [`validation`](crate::validation); text input is debounced per field.
//!
//! `submit` runs the guard:
//!
//! 1. Snapshot the values and validate every applicable field, marking each
//!    failing field. Any failure aborts with the aggregate banner.
//! 2. Enter `Submitting`: disable the control and show the loading label.
//! 3. Make exactly one transport attempt, in its own task, so a panicking
//!    transport surfaces as a fault instead of unwinding through the guard.
//! 4. Success resets the form and shows the success banner; failure keeps the
//!    values and shows the retry banner.
//! 5. Restore the submit control.
//!
//! Steps 3 to 5 run in a spawned settle task that owns the drop guard.
//! `submit` only awaits that task, so dropping the submit future leaves the
//! attempt running: the state stays `Submitting` until it settles and its
//! outcome still reaches the page.
//!
//! State sits behind a mutex that is never held across an `.await`, so other
//! field events are processed while an attempt is pending.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;
use tracing::Instrument;
use uuid::Uuid;

use vortex_core::logging::submission_span;
use vortex_core::settings::{MessageSettings, Settings};
use vortex_core::{ValidationError, VortexError};

use crate::assist::{CharCounter, Subject};
use crate::debounce::Debouncer;
use crate::fields::{FieldId, FieldValue};
use crate::form::ContactForm;
use crate::state::SubmissionState;
use crate::transport::{SubmitReceipt, SubmitTransport, TransportError};
use crate::validation::{self, FormErrors};
use crate::view::{FormView, StatusMessage};
use crate::widgets::WidgetType;

/// A page event targeting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A keystroke changed a control's value.
    Input(FieldId, FieldValue),
    /// A control lost focus.
    Blur(FieldId),
    /// A select or checkbox changed.
    Change(FieldId, FieldValue),
    /// The form was submitted.
    Submit,
}

/// Why a submission attempt did not succeed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The transport reported an expected failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The attempt ended without an outcome (for example, the transport
    /// panicked).
    #[error("unexpected fault during submission: {0}")]
    Fault(String),
}

/// The result of a submit event.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The attempt succeeded.
    Submitted(SubmitReceipt),
    /// Validation failed; no attempt was made.
    Rejected(FormErrors),
    /// The attempt was made and failed.
    Failed(SubmitError),
    /// An attempt was already in flight; this submit was ignored.
    InFlight,
}

impl SubmitOutcome {
    /// Returns `true` if the attempt succeeded.
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// Converts the outcome into a result for callers outside the page.
    pub fn into_result(self) -> Result<SubmitReceipt, VortexError> {
        match self {
            Self::Submitted(receipt) => Ok(receipt),
            Self::Rejected(errors) => Err(VortexError::InvalidForm(errors.len())),
            Self::Failed(err) => Err(VortexError::SubmissionFailed(err.to_string())),
            Self::InFlight => Err(VortexError::SubmissionInFlight),
        }
    }
}

/// The controller's tunables.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Quiet period of debounced input validation.
    pub debounce: Duration,
    /// Submit control label while an attempt is in flight.
    pub loading_label: String,
    /// Maximum shown by the message character counter.
    pub message_max_length: usize,
    /// Banner texts.
    pub messages: MessageSettings,
}

impl ControllerConfig {
    /// Extracts the controller's tunables from the settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.form.debounce_ms),
            loading_label: settings.form.loading_label.clone(),
            message_max_length: settings.form.message_max_length,
            messages: settings.messages.clone(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[derive(Debug, Default)]
struct FormState {
    values: ContactForm,
    errors: FormErrors,
    submission: SubmissionState,
    status: Option<StatusMessage>,
}

struct Inner {
    config: ControllerConfig,
    view: Arc<dyn FormView>,
    transport: Arc<dyn SubmitTransport>,
    state: Mutex<FormState>,
    debouncer: Debouncer<FieldId>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evaluates the field's current value and reflects the result.
    fn validate_field(&self, field: FieldId) -> Result<(), ValidationError> {
        let mut state = self.state();
        let result = validation::validate_field(field, &state.values.value(field));
        self.reflect(&mut state, field, &result);
        result
    }

    fn reflect(&self, state: &mut FormState, field: FieldId, result: &Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                tracing::debug!(field = %field, "field valid");
                state.errors.remove(field);
                self.view.clear_field_error(field);
            }
            Err(err) => {
                tracing::debug!(field = %field, code = %err.code, "field invalid");
                self.view.show_field_error(field, &err.message);
                state.errors.insert(field, err.clone());
            }
        }
    }

    /// A user interaction dismisses a finished outcome and its banner.
    fn interact(&self, state: &mut FormState) {
        if state.submission.is_in_flight() {
            return;
        }
        state.submission.settle();
        if state.status.take().is_some() {
            self.view.clear_status();
        }
    }

    fn set_status(&self, state: &mut FormState, status: StatusMessage) {
        self.view.show_status(&status);
        state.status = Some(status);
    }

    fn store(&self, state: &mut FormState, field: FieldId, value: FieldValue) {
        state.values.set(field, value);
        if field == FieldId::Message {
            self.view.update_char_counter(&CharCounter::new(
                &state.values.message,
                self.config.message_max_length,
            ));
        }
    }

    fn finish(&self, result: &Result<SubmitReceipt, SubmitError>) {
        let mut state = self.state();
        match result {
            Ok(receipt) => {
                tracing::info!(receipt = %receipt.id, "submission succeeded");
                self.debouncer.cancel_all();
                state.values.reset();
                self.view.reset_fields();
                self.view
                    .update_char_counter(&CharCounter::new("", self.config.message_max_length));
                state.errors.clear();
                for field in FieldId::ALL {
                    self.view.clear_field_error(field);
                }
                state.submission.complete(true);
                self.set_status(
                    &mut state,
                    StatusMessage::success(&self.config.messages.success),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "submission failed");
                state.submission.complete(false);
                self.set_status(&mut state, StatusMessage::error(&self.config.messages.failure));
            }
        }
    }

    /// Makes the one attempt for `snapshot`, records its outcome and restores
    /// the submit control.
    async fn attempt(
        self: Arc<Self>,
        snapshot: ContactForm,
        original_label: String,
    ) -> Result<SubmitReceipt, SubmitError> {
        let guard = LoadingGuard {
            inner: Arc::clone(&self),
            original_label,
            restored: false,
        };

        tracing::info!("submitting contact form");
        let transport = Arc::clone(&self.transport);
        let call = tokio::spawn(async move { transport.submit(&snapshot).await }.in_current_span());

        let result = match call.await {
            Ok(Ok(receipt)) => Ok(receipt),
            Ok(Err(err)) => Err(SubmitError::Transport(err)),
            Err(join_err) => Err(SubmitError::Fault(fault_reason(&join_err))),
        };

        self.finish(&result);
        guard.restore();
        result
    }
}

fn fault_reason(err: &JoinError) -> String {
    if err.is_panic() {
        "submission task panicked".to_string()
    } else {
        "submission task was cancelled".to_string()
    }
}

/// Restores the submit control when dropped.
struct LoadingGuard {
    inner: Arc<Inner>,
    original_label: String,
    restored: bool,
}

impl LoadingGuard {
    fn restore(mut self) {
        self.restore_now();
    }

    fn restore_now(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        let mut state = self.inner.state();
        if state.submission.is_in_flight() {
            tracing::warn!("settle task ended before an outcome was recorded");
            state.submission.complete(false);
            self.inner.set_status(
                &mut state,
                StatusMessage::error(&self.inner.config.messages.failure),
            );
        }
        self.inner.view.hide_loading(&self.original_label);
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.restore_now();
    }
}

/// Drives one contact form.
///
/// Cloning is cheap and yields a handle to the same form. When the last handle
/// is dropped, pending debounced validations are aborted.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct FormController {
    inner: Arc<Inner>,
}

impl FormController {
    /// Creates a controller configured from `settings`.
    pub fn new(
        view: Arc<dyn FormView>,
        transport: Arc<dyn SubmitTransport>,
        settings: &Settings,
    ) -> Self {
        Self::with_config(view, transport, ControllerConfig::from_settings(settings))
    }

    /// Creates a controller with an explicit configuration.
    ///
    /// The message character counter is shown immediately.
    pub fn with_config(
        view: Arc<dyn FormView>,
        transport: Arc<dyn SubmitTransport>,
        config: ControllerConfig,
    ) -> Self {
        view.update_char_counter(&CharCounter::new("", config.message_max_length));
        let debouncer = Debouncer::new(config.debounce);
        Self {
            inner: Arc::new(Inner {
                config,
                view,
                transport,
                state: Mutex::new(FormState::default()),
                debouncer,
            }),
        }
    }

    /// Handles a keystroke: stores the value and, for text-like fields,
    /// schedules validation after the quiet period.
    ///
    /// A further keystroke on the same field before the period elapses
    /// restarts it. When the evaluation runs it uses the field's latest value.
    pub fn input(&self, field: FieldId, value: impl Into<FieldValue>) {
        {
            let mut state = self.inner.state();
            self.inner.interact(&mut state);
            self.inner.store(&mut state, field, value.into());
        }

        if field.widget().is_text_like() {
            let weak = Arc::downgrade(&self.inner);
            self.inner.debouncer.schedule(field, async move {
                if let Some(inner) = weak.upgrade() {
                    let _ = inner.validate_field(field);
                }
            });
        }
    }

    /// Handles loss of focus: validates the field immediately.
    ///
    /// Any pending debounced validation of the field is cancelled. The
    /// checkbox validates on change only, so blurring it does nothing.
    pub fn blur(&self, field: FieldId) {
        if field.widget() == WidgetType::CheckboxInput {
            return;
        }
        self.inner.debouncer.cancel(field);
        let _ = self.inner.validate_field(field);
    }

    /// Handles a change event: stores the value and validates immediately.
    ///
    /// Picking a subject while the message is blank swaps in that subject's
    /// message prompt.
    pub fn change(&self, field: FieldId, value: impl Into<FieldValue>) {
        {
            let mut state = self.inner.state();
            self.inner.interact(&mut state);
            let value: FieldValue = value.into();
            if field == FieldId::Subject && state.values.message.trim().is_empty() {
                if let Ok(subject) = value.as_text().parse::<Subject>() {
                    self.inner.view.set_message_placeholder(subject.prompt());
                }
            }
            self.inner.store(&mut state, field, value);
        }
        self.inner.debouncer.cancel(field);
        let _ = self.inner.validate_field(field);
    }

    /// Validates the field's current value and reflects the result.
    pub fn validate(&self, field: FieldId) -> Result<(), ValidationError> {
        self.inner.validate_field(field)
    }

    /// Runs the submission guard. See the module documentation.
    pub async fn submit(&self) -> SubmitOutcome {
        let inner = &self.inner;

        let (snapshot, original_label) = {
            let mut state = inner.state();
            if state.submission.is_in_flight() {
                tracing::warn!("submit ignored: a submission is already in flight");
                return SubmitOutcome::InFlight;
            }
            inner.interact(&mut state);
            inner.debouncer.cancel_all();

            let snapshot = state.values.clone();
            let errors = validation::validate_form(&snapshot);
            for field in snapshot.fields_to_validate() {
                let result = errors.get(field).map_or(Ok(()), |err| Err(err.clone()));
                inner.reflect(&mut state, field, &result);
            }

            if !errors.is_empty() {
                tracing::info!(invalid = errors.len(), "submission blocked by validation errors");
                inner.set_status(
                    &mut state,
                    StatusMessage::error(&inner.config.messages.correct_errors),
                );
                return SubmitOutcome::Rejected(errors);
            }

            if state.submission.begin().is_err() {
                return SubmitOutcome::InFlight;
            }
            let original_label = inner.view.submit_label();
            inner.view.show_loading(&inner.config.loading_label);
            (snapshot, original_label)
        };

        let id = Uuid::new_v4();
        let settle = tokio::spawn(
            Arc::clone(inner)
                .attempt(snapshot, original_label)
                .instrument(submission_span(&id)),
        );

        match settle.await {
            Ok(Ok(receipt)) => SubmitOutcome::Submitted(receipt),
            Ok(Err(err)) => SubmitOutcome::Failed(err),
            Err(join_err) => SubmitOutcome::Failed(SubmitError::Fault(fault_reason(&join_err))),
        }
    }

    /// Applies one page event. Returns the outcome for `Submit` events.
    pub async fn dispatch(&self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Input(field, value) => self.input(field, value),
            FormEvent::Blur(field) => self.blur(field),
            FormEvent::Change(field, value) => self.change(field, value),
            FormEvent::Submit => return Some(self.submit().await),
        }
        None
    }

    /// Returns a copy of the current values.
    pub fn values(&self) -> ContactForm {
        self.inner.state().values.clone()
    }

    /// Returns the errors currently shown on the page.
    pub fn errors(&self) -> FormErrors {
        self.inner.state().errors.clone()
    }

    /// Returns the submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.inner.state().submission
    }

    /// Returns the banner currently shown, if any.
    pub fn status(&self) -> Option<StatusMessage> {
        self.inner.state().status.clone()
    }

    /// Returns `true` if a debounced validation of `field` is pending.
    pub fn is_pending(&self, field: FieldId) -> bool {
        self.inner.debouncer.is_pending(field)
    }

    /// Aborts every pending debounced validation.
    pub fn cancel_pending(&self) {
        self.inner.debouncer.cancel_all();
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("config", &self.inner.config)
            .field("state", &*self.inner.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TestView {
        log: Mutex<Vec<String>>,
    }

    impl TestView {
        fn push(&self, entry: String) {
            self.log.lock().unwrap().push(entry);
        }

        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    impl FormView for TestView {
        fn show_field_error(&self, field: FieldId, message: &str) {
            self.push(format!("error {field}: {message}"));
        }

        fn clear_field_error(&self, field: FieldId) {
            self.push(format!("clear {field}"));
        }

        fn show_status(&self, status: &StatusMessage) {
            self.push(format!("status {}: {}", status.kind, status.text));
        }

        fn clear_status(&self) {
            self.push("clear status".to_string());
        }

        fn submit_label(&self) -> String {
            "Send Message".to_string()
        }

        fn show_loading(&self, loading_label: &str) {
            self.push(format!("loading {loading_label}"));
        }

        fn hide_loading(&self, original_label: &str) {
            self.push(format!("restore {original_label}"));
        }

        fn reset_fields(&self) {
            self.push("reset".to_string());
        }

        fn set_message_placeholder(&self, prompt: &str) {
            self.push(format!("placeholder {prompt}"));
        }
    }

    struct CountingTransport {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SubmitTransport for CountingTransport {
        async fn submit(&self, _form: &ContactForm) -> Result<SubmitReceipt, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TransportError::Unavailable("offline".into()))
            } else {
                Ok(SubmitReceipt::new())
            }
        }
    }

    fn setup(fail: bool) -> (FormController, Arc<TestView>, Arc<CountingTransport>) {
        let view = Arc::new(TestView::default());
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
            fail,
        });
        let controller = FormController::with_config(
            view.clone(),
            transport.clone(),
            ControllerConfig::default(),
        );
        (controller, view, transport)
    }

    fn fill_valid(controller: &FormController) {
        controller.change(FieldId::FirstName, "Ada");
        controller.change(FieldId::LastName, "Lovelace");
        controller.change(FieldId::Email, "ada@example.com");
        controller.change(FieldId::Subject, "cloud");
        controller.change(FieldId::Message, "Planning a migration to the cloud.");
        controller.change(FieldId::Privacy, true);
    }

    #[tokio::test]
    async fn test_blur_validates_immediately() {
        let (controller, view, _) = setup(false);
        controller.input(FieldId::FirstName, "A");
        controller.blur(FieldId::FirstName);

        assert!(!controller.is_pending(FieldId::FirstName));
        assert!(controller.errors().contains(FieldId::FirstName));
        assert!(view
            .log()
            .contains(&"error firstName: First name must be at least 2 characters".to_string()));
    }

    #[tokio::test]
    async fn test_blur_on_checkbox_is_ignored() {
        let (controller, view, _) = setup(false);
        controller.blur(FieldId::Privacy);
        assert!(view.log().is_empty());
    }

    #[tokio::test]
    async fn test_change_validates_checkbox() {
        let (controller, _, _) = setup(false);
        controller.change(FieldId::Privacy, false);
        assert!(controller.errors().contains(FieldId::Privacy));
        controller.change(FieldId::Privacy, true);
        assert!(controller.errors().is_empty());
    }

    #[tokio::test]
    async fn test_subject_change_sets_prompt_when_message_blank() {
        let (controller, view, _) = setup(false);
        controller.change(FieldId::Subject, "support");
        assert!(view.log().contains(&format!(
            "placeholder {}",
            Subject::Support.prompt()
        )));

        controller.input(FieldId::Message, "Already typing");
        controller.change(FieldId::Subject, "cloud");
        assert!(!view
            .log()
            .contains(&format!("placeholder {}", Subject::Cloud.prompt())));
    }

    #[tokio::test]
    async fn test_submit_invalid_makes_no_attempt() {
        let (controller, view, transport) = setup(false);
        let outcome = controller.submit().await;

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.len(), 6);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            controller.status(),
            Some(StatusMessage::error("Please correct the errors above."))
        );
        assert!(!view.log().iter().any(|entry| entry.starts_with("loading")));
    }

    #[tokio::test]
    async fn test_submit_success_resets_and_restores() {
        let (controller, view, transport) = setup(false);
        fill_valid(&controller);

        let outcome = controller.submit().await;
        assert!(outcome.is_submitted());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(controller.values().is_empty());
        assert_eq!(controller.submission_state(), SubmissionState::Succeeded);

        let log = view.log();
        assert_eq!(log.last().map(String::as_str), Some("restore Send Message"));
        assert!(log.contains(&"loading Sending...".to_string()));
        assert!(log.contains(&"reset".to_string()));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_values() {
        let (controller, view, _) = setup(true);
        fill_valid(&controller);
        let before = controller.values();

        let outcome = controller.submit().await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Transport(TransportError::Unavailable(_)))
        ));
        assert_eq!(controller.values(), before);
        assert_eq!(controller.submission_state(), SubmissionState::Failed);
        assert_eq!(
            view.log().last().map(String::as_str),
            Some("restore Send Message")
        );
    }

    #[tokio::test]
    async fn test_interaction_after_outcome_settles_state() {
        let (controller, view, _) = setup(true);
        fill_valid(&controller);
        let _ = controller.submit().await;

        controller.input(FieldId::Message, "Trying again with more detail.");
        assert_eq!(controller.submission_state(), SubmissionState::Idle);
        assert_eq!(controller.status(), None);
        assert!(view.log().contains(&"clear status".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch() {
        let (controller, _, _) = setup(false);
        assert!(controller
            .dispatch(FormEvent::Change(FieldId::Subject, "general".into()))
            .await
            .is_none());
        assert_eq!(controller.values().subject, "general");

        let outcome = controller.dispatch(FormEvent::Submit).await;
        assert!(matches!(outcome, Some(SubmitOutcome::Rejected(_))));
    }

    #[test]
    fn test_outcome_into_result() {
        let err = SubmitOutcome::InFlight.into_result().unwrap_err();
        assert!(matches!(err, VortexError::SubmissionInFlight));
        let err = SubmitOutcome::Failed(SubmitError::Fault("boom".into()))
            .into_result()
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
