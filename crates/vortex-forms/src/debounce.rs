//! Per-key debounced tasks.
//!
//! [`Debouncer`] delays a task until a quiet period has elapsed. Scheduling a
//! new task for a key aborts that key's pending one and restarts the clock, so
//! a burst of events runs exactly one task, after the last event. Keys are
//! independent of each other. Dropping the debouncer aborts every pending
//! task.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;

/// Schedules cancellable delayed tasks keyed by `K`.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<K> {
    delay: Duration,
    pending: Mutex<HashMap<K, AbortHandle>>,
}

impl<K> Debouncer<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the quiet period.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `task` once the quiet period elapses, unless another task is
    /// scheduled for the same key first.
    ///
    /// Any task still pending for `key` is aborted.
    pub fn schedule<F>(&self, key: K, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = tokio::time::Instant::now() + self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        });

        if let Some(previous) = self.pending().insert(key, handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Aborts the pending task for `key`. Returns `true` if one was pending.
    pub fn cancel(&self, key: K) -> bool {
        self.pending().remove(&key).is_some_and(|handle| {
            let was_pending = !handle.is_finished();
            handle.abort();
            was_pending
        })
    }

    /// Aborts every pending task.
    pub fn cancel_all(&self) {
        for (_, handle) in self.pending().drain() {
            handle.abort();
        }
    }

    /// Returns `true` if a task for `key` is scheduled and has not finished.
    pub fn is_pending(&self, key: K) -> bool {
        self.pending()
            .get(&key)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Returns the number of keys with a task that has not finished.
    pub fn pending_count(&self) -> usize {
        self.pending()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<K, AbortHandle>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K> Drop for Debouncer<K> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in pending.drain() {
            handle.abort();
        }
    }
}

impl<K> std::fmt::Debug for Debouncer<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
