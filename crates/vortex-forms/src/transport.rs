//! Submission transports.
//!
//! The controller hands the submission snapshot to a [`SubmitTransport`] and
//! awaits exactly one attempt. The production site has no backend yet, so the
//! only transport shipped here is [`SimulatedTransport`], which waits a fixed
//! latency and optionally injects failures for resilience testing.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use vortex_core::settings::TransportSettings;

use crate::form::ContactForm;

/// Acknowledgment of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Identifier assigned to the submission.
    pub id: Uuid,
    /// When the submission was accepted.
    pub received_at: DateTime<Utc>,
}

impl SubmitReceipt {
    /// Creates a receipt with a fresh id, accepted now.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SubmitReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected failure outcomes of a submission attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The receiving side refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The receiving side could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
    /// A failure injected by [`SimulatedTransport`].
    #[error("simulated server error")]
    Simulated,
}

/// Delivers a contact form submission.
///
/// Implementations perform a single attempt per call; retrying is the user's
/// decision, not the transport's.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Submits `form`, resolving once the attempt succeeds or fails.
    async fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, TransportError>;
}

/// A stand-in transport that accepts submissions after a delay.
///
/// Failure injection is off unless a non-zero failure rate is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedTransport {
    /// Creates a transport with the given latency and no failure injection.
    pub const fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure_rate: 0.0,
        }
    }

    /// Creates a transport from the `transport` settings section.
    pub fn from_settings(settings: &TransportSettings) -> Self {
        Self::new(Duration::from_millis(settings.latency_ms))
            .with_failure_rate(settings.failure_rate)
    }

    /// Sets the probability that an attempt fails, clamped to `[0, 1]`.
    ///
    /// A NaN rate disables failure injection.
    #[must_use]
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Returns the configured latency.
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the configured failure probability.
    pub const fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

#[async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, TransportError> {
        let fail = self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate);
        tracing::debug!(
            subject = %form.subject,
            latency_ms = u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX),
            "simulating submission"
        );
        tokio::time::sleep(self.latency).await;

        if fail {
            Err(TransportError::Simulated)
        } else {
            Ok(SubmitReceipt::new())
        }
    }
}
