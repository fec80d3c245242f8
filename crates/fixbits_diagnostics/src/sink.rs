//! Failure sinks: where runtime failures are sent.

use crate::failure::Failure;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Receives failures reported by the runtime.
///
/// The runtime never resumes the failed operation after reporting, so a
/// sink either terminates the run or records the failure for the host to
/// act on. Sinks are shared between concurrently evaluated instructions and
/// must be thread-safe.
pub trait FailureSink: Send + Sync {
    /// Reports a failure.
    fn report(&self, failure: Failure);
}

/// A sink that panics with the failure message.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbortSink;

impl FailureSink for AbortSink {
    fn report(&self, failure: Failure) {
        panic!("{failure}");
    }
}

/// A thread-safe accumulator for failures.
///
/// The failure count is tracked atomically so [`has_failures`](Self::has_failures)
/// does not take the lock.
pub struct RecordingSink {
    failures: Mutex<Vec<Failure>>,
    count: AtomicUsize,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
            count: AtomicUsize::new(0),
        }
    }

    /// Returns `true` if anything has been reported.
    pub fn has_failures(&self) -> bool {
        self.count.load(Ordering::Relaxed) > 0
    }

    /// Total number of failures reported so far.
    pub fn failure_count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Takes all recorded failures, leaving the sink empty.
    ///
    /// The count keeps running; it is not reset.
    pub fn take_all(&self) -> Vec<Failure> {
        let mut failures = self.lock();
        std::mem::take(&mut *failures)
    }

    /// Returns a snapshot of the recorded failures.
    pub fn failures(&self) -> Vec<Failure> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Failure>> {
        // A panic while holding the lock cannot leave the Vec half-updated.
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FailureSink for RecordingSink {
    fn report(&self, failure: Failure) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.lock().push(failure);
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}
