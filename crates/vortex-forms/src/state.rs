//! Submission lifecycle of a form.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──complete──▶ Succeeded | Failed ──settle──▶ Idle
//! ```
//!
//! `begin` refuses to start a second attempt while one is in flight; the
//! submit control is disabled exactly while the state is `Submitting`.

use std::fmt;

use vortex_core::VortexError;

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No attempt in flight and no outcome to show.
    #[default]
    Idle,
    /// One attempt is in flight.
    Submitting,
    /// The last attempt succeeded; its banner is showing.
    Succeeded,
    /// The last attempt failed; its banner is showing.
    Failed,
}

impl SubmissionState {
    /// Returns `true` while an attempt is in flight.
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns `true` if the submit control should be enabled.
    pub const fn submit_enabled(self) -> bool {
        !self.is_in_flight()
    }

    /// Starts an attempt.
    ///
    /// A finished outcome is settled first, so a new submit from `Succeeded`
    /// or `Failed` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`VortexError::SubmissionInFlight`] if an attempt is already in
    /// flight.
    pub fn begin(&mut self) -> Result<(), VortexError> {
        if self.is_in_flight() {
            return Err(VortexError::SubmissionInFlight);
        }
        *self = Self::Submitting;
        Ok(())
    }

    /// Records the outcome of the in-flight attempt.
    ///
    /// Has no effect unless an attempt is in flight.
    pub fn complete(&mut self, succeeded: bool) {
        if self.is_in_flight() {
            *self = if succeeded { Self::Succeeded } else { Self::Failed };
        }
    }

    /// Returns a finished outcome to `Idle`. Returns `true` if the state
    /// changed.
    pub fn settle(&mut self) -> bool {
        if matches!(self, Self::Succeeded | Self::Failed) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.submit_enabled());
    }

    #[test]
    fn test_begin_and_complete() {
        let mut state = SubmissionState::Idle;
        state.begin().unwrap();
        assert!(state.is_in_flight());
        assert!(!state.submit_enabled());

        state.complete(true);
        assert_eq!(state, SubmissionState::Succeeded);
        assert!(state.submit_enabled());
    }

    #[test]
    fn test_begin_refuses_second_attempt() {
        let mut state = SubmissionState::Idle;
        state.begin().unwrap();
        let err = state.begin().unwrap_err();
        assert!(matches!(err, VortexError::SubmissionInFlight));
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_begin_after_outcome() {
        let mut state = SubmissionState::Failed;
        state.begin().unwrap();
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_complete_without_attempt_is_ignored() {
        let mut state = SubmissionState::Idle;
        state.complete(false);
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_settle() {
        let mut state = SubmissionState::Failed;
        assert!(state.settle());
        assert_eq!(state, SubmissionState::Idle);
        assert!(!state.settle());

        let mut state = SubmissionState::Submitting;
        assert!(!state.settle());
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_display() {
        assert_eq!(SubmissionState::Submitting.to_string(), "submitting");
    }
}
