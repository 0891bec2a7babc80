//! Diagnostic sink abstraction for decoupling header builders from logging.
//!
//! Builders depend on the [`DiagnosticSink`] trait rather than the global
//! logger, so tests can observe exactly which warnings a build produced.

use parking_lot::Mutex;

use crate::error::{ErrorCode, HeaderWarning};

/// Trait for reporting recoverable header conditions without knowledge of
/// where they end up.
///
/// Every report is WARNING severity; the sink decides how to surface it.
///
/// # Example
///
/// ```ignore
/// struct MyMuxer {
///     sink: Arc<dyn DiagnosticSink>,
/// }
///
/// impl MyMuxer {
///     fn start(&self, params: &StreamParameters) {
///         let header = build_extensible_header(params, self.sink.as_ref());
///         // ...
///     }
/// }
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Reports a warning produced while building a header.
    fn warn(&self, warning: HeaderWarning);
}

/// Sink that forwards warnings to the `log` facade.
///
/// This is the default sink; whatever logger the binary installs decides
/// where the messages go.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, warning: HeaderWarning) {
        log::warn!("[WAV] {} [{}]", warning, warning.code());
    }
}

/// Sink that discards all warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warn(&self, _warning: HeaderWarning) {
        // No-op
    }
}

/// Sink that records warnings in order.
///
/// Useful for callers that want to surface warnings in their own reports,
/// and for asserting on builder behavior in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<HeaderWarning>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the warnings collected so far.
    pub fn warnings(&self) -> Vec<HeaderWarning> {
        self.warnings.lock().clone()
    }

    /// Removes and returns the collected warnings.
    pub fn drain(&self) -> Vec<HeaderWarning> {
        std::mem::take(&mut *self.warnings.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, warning: HeaderWarning) {
        self.warnings.lock().push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn collecting_sink_keeps_order() {
        let sink = Arc::new(CollectingSink::new());
        let dyn_sink: Arc<dyn DiagnosticSink> = sink.clone();

        dyn_sink.warn(HeaderWarning::SampleCountOverflow { samples: 1 << 33 });
        dyn_sink.warn(HeaderWarning::PayloadSizeOverflow { bytes: 1 << 35 });

        assert_eq!(
            sink.warnings(),
            vec![
                HeaderWarning::SampleCountOverflow { samples: 1 << 33 },
                HeaderWarning::PayloadSizeOverflow { bytes: 1 << 35 },
            ]
        );
    }

    #[test]
    fn drain_empties_sink() {
        let sink = CollectingSink::new();
        sink.warn(HeaderWarning::SampleCountOverflow { samples: u64::MAX });

        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn log_and_noop_sinks_accept_warnings() {
        // Neither sink has observable state; they must simply not panic.
        LogSink.warn(HeaderWarning::SampleCountOverflow { samples: 1 << 40 });
        NoopSink.warn(HeaderWarning::PayloadSizeOverflow { bytes: 1 << 40 });
    }
}
