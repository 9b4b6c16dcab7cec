use crate::domain::ports::{Clock, LogSink};
use chrono::{DateTime, Utc};

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Forwards rental log entries to the `tracing` subscriber.
///
/// Timestamps are left to the subscriber's formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "rental", "{message}");
    }
}
