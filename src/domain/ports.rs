use chrono::{DateTime, Utc};

/// Append-only audit log the rental engine reports to.
///
/// Sinks timestamp entries themselves and never fail once constructed.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Source of the current time for due dates and late penalties.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type LogSinkBox = Box<dyn LogSink>;
pub type ClockBox = Box<dyn Clock>;
