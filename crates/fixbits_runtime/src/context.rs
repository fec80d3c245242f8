//! Runtime construction, failure reporting, and teardown.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fixbits_config::{FailurePolicy, RuntimeConfig};
use fixbits_core::{FixError, FixResult};
use fixbits_diagnostics::{AbortSink, Failure, FailureSink, RecordingSink};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// An explicit evaluation context: failure sink, generator, and settings.
pub struct Runtime {
    pub(crate) config: RuntimeConfig,
    pub(crate) rng: StdRng,
    sink: Arc<dyn FailureSink>,
    recording: Option<Arc<RecordingSink>>,
    reported: AtomicUsize,
}

/// What a finished run reports back to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of failures reported through the runtime.
    pub failure_count: usize,
    /// The failures themselves, when the runtime installed a recording sink.
    pub failures: Vec<Failure>,
}

impl RunSummary {
    /// Returns `true` if no failure was reported.
    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }
}

impl Runtime {
    /// Creates a runtime with the sink selected by `config.on_failure`.
    ///
    /// `abort` installs an [`AbortSink`]; `record` installs a
    /// [`RecordingSink`] whose contents are returned by [`finish`](Self::finish).
    pub fn new(config: RuntimeConfig) -> Self {
        match config.on_failure {
            FailurePolicy::Abort => Self::build(config, Arc::new(AbortSink), None),
            FailurePolicy::Record => {
                let recording = Arc::new(RecordingSink::new());
                let sink: Arc<dyn FailureSink> = recording.clone();
                Self::build(config, sink, Some(recording))
            }
        }
    }

    /// Creates a runtime that reports to a host-supplied sink.
    ///
    /// `config.on_failure` is ignored.
    pub fn with_sink(config: RuntimeConfig, sink: Arc<dyn FailureSink>) -> Self {
        Self::build(config, sink, None)
    }

    fn build(
        config: RuntimeConfig,
        sink: Arc<dyn FailureSink>,
        recording: Option<Arc<RecordingSink>>,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed_u64());
        Self {
            config,
            rng,
            sink,
            recording,
            reported: AtomicUsize::new(0),
        }
    }

    /// The settings this runtime was created with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Number of failures reported so far.
    pub fn failure_count(&self) -> usize {
        self.reported.load(Ordering::Relaxed)
    }

    /// Sends a failure to the sink.
    pub fn report(&self, failure: Failure) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        self.sink.report(failure);
    }

    /// Forwards an error to the sink and hands the result back unchanged.
    pub fn check<T>(&self, result: FixResult<T>) -> FixResult<T> {
        if let Err(ref err) = result {
            self.report(Failure::from(err));
        }
        result
    }

    /// Reports an assertion failure when `cond` is false.
    pub fn assert(&self, cond: bool, msg: &str) -> FixResult<()> {
        if cond {
            return Ok(());
        }
        self.check(Err(FixError::AssertionFailed(msg.to_string())))
    }

    /// Reports a pattern-match failure and returns the error for the caller
    /// to propagate.
    pub fn match_failure(&self, msg: &str) -> FixError {
        let err = FixError::MatchFailure(msg.to_string());
        self.report(Failure::from(&err));
        err
    }

    /// Tears the runtime down and summarizes the run.
    pub fn finish(self) -> RunSummary {
        let failures = self
            .recording
            .as_ref()
            .map(|sink| sink.take_all())
            .unwrap_or_default();
        RunSummary {
            failure_count: self.reported.load(Ordering::Relaxed),
            failures,
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("failure_count", &self.failure_count())
            .finish_non_exhaustive()
    }
}
