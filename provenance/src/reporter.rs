//! Error reporting sink for operations that log instead of failing.
//!
//! The commit reader never surfaces its errors to the caller. It hands them
//! to an [`ErrorReporter`] instead, so embedding code and tests decide where
//! they end up.

use std::error::Error;
use std::sync::Mutex;

pub trait ErrorReporter: Send + Sync {
    /// Report a failure described by `context`, caused by `cause`.
    fn report_error(&self, context: &str, cause: &dyn Error);
}

/// Forwards reports to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingReporter {
    fn report_error(&self, context: &str, cause: &dyn Error) {
        tracing::error!(error = %cause, "{}", context);
    }
}

/// A single captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub context: String,
    pub cause: String,
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<ReportedError>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ReportedError> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, context: &str, cause: &dyn Error) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(ReportedError {
                context: context.to_string(),
                cause: cause.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_recording_reporter_captures_context_and_cause() {
        let reporter = RecordingReporter::new();
        assert!(reporter.is_empty());

        let cause = io::Error::new(io::ErrorKind::NotFound, "no such thing");
        reporter.report_error("lookup failed", &cause);

        let entries = reporter.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].context, "lookup failed");
        assert_eq!(entries[0].cause, "no such thing");
    }

    #[test]
    fn test_reporters_as_trait_objects() {
        let recording = RecordingReporter::new();
        let reporters: Vec<&dyn ErrorReporter> = vec![&TracingReporter, &recording];

        let cause = io::Error::other("boom");
        for reporter in reporters {
            reporter.report_error("failed", &cause);
        }

        assert_eq!(recording.len(), 1);
    }
}
