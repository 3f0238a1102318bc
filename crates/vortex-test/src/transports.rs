//! Transports with scripted outcomes.
//!
//! [`StubTransport`] resolves immediately with a fixed outcome and records
//! every payload it receives. [`GatedTransport`] additionally holds each
//! attempt open until the test releases it, which makes the in-flight window
//! observable.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use vortex_forms::{ContactForm, SubmitReceipt, SubmitTransport, TransportError};

/// What a scripted transport does when called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// Resolve with a fresh receipt.
    Accept,
    /// Resolve with the given error.
    Fail(TransportError),
    /// Panic inside the attempt.
    Panic,
}

impl Behavior {
    fn resolve(&self) -> Result<SubmitReceipt, TransportError> {
        match self {
            Self::Accept => Ok(SubmitReceipt::new()),
            Self::Fail(err) => Err(err.clone()),
            Self::Panic => panic!("scripted transport panic"),
        }
    }
}

/// Payloads received by a scripted transport.
#[derive(Debug, Clone, Default)]
struct Attempts {
    payloads: Arc<Mutex<Vec<ContactForm>>>,
}

impl Attempts {
    fn record(&self, form: &ContactForm) {
        self.payloads
            .lock()
            .expect("Attempts lock poisoned")
            .push(form.clone());
    }

    fn all(&self) -> Vec<ContactForm> {
        self.payloads.lock().expect("Attempts lock poisoned").clone()
    }
}

/// A transport that resolves immediately with a scripted outcome.
#[derive(Debug, Clone)]
pub struct StubTransport {
    behavior: Behavior,
    attempts: Attempts,
}

impl StubTransport {
    /// Creates a transport with the given behavior.
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            attempts: Attempts::default(),
        }
    }

    /// A transport whose every attempt succeeds.
    pub fn accepting() -> Self {
        Self::new(Behavior::Accept)
    }

    /// A transport whose every attempt fails as unavailable.
    pub fn failing() -> Self {
        Self::new(Behavior::Fail(TransportError::Unavailable(
            "stub transport offline".to_string(),
        )))
    }

    /// A transport whose every attempt panics.
    pub fn panicking() -> Self {
        Self::new(Behavior::Panic)
    }

    /// Returns the number of attempts received.
    pub fn attempts(&self) -> usize {
        self.attempts.all().len()
    }

    /// Returns every payload received, oldest first.
    pub fn payloads(&self) -> Vec<ContactForm> {
        self.attempts.all()
    }
}

#[async_trait]
impl SubmitTransport for StubTransport {
    async fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, TransportError> {
        self.attempts.record(form);
        self.behavior.resolve()
    }
}

/// A transport that holds each attempt until released.
#[derive(Debug)]
pub struct GatedTransport {
    behavior: Behavior,
    attempts: Attempts,
    entered: Notify,
    gate: Notify,
}

impl GatedTransport {
    /// Creates a gated transport that resolves with `behavior` once released.
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            attempts: Attempts::default(),
            entered: Notify::new(),
            gate: Notify::new(),
        }
    }

    /// A gated transport whose attempts succeed once released.
    pub fn accepting() -> Self {
        Self::new(Behavior::Accept)
    }

    /// A gated transport whose attempts fail once released.
    pub fn failing() -> Self {
        Self::new(Behavior::Fail(TransportError::Rejected(
            "gated transport refused".to_string(),
        )))
    }

    /// Waits until an attempt has started and is holding at the gate.
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Lets one held (or the next) attempt resolve.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Returns the number of attempts received.
    pub fn attempts(&self) -> usize {
        self.attempts.all().len()
    }

    /// Returns every payload received, oldest first.
    pub fn payloads(&self) -> Vec<ContactForm> {
        self.attempts.all()
    }
}

#[async_trait]
impl SubmitTransport for GatedTransport {
    async fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, TransportError> {
        self.attempts.record(form);
        self.entered.notify_one();
        self.gate.notified().await;
        self.behavior.resolve()
    }
}
