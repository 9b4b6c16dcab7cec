use crate::domain::ports::{Clock, LogSink};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// A log sink that keeps entries in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the engine
/// and inspect the other.
#[derive(Default, Clone)]
pub struct MemoryLogSink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|entry| entry.contains(needle))
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// A clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_memory_log_sink_shares_buffer() {
        let sink = MemoryLogSink::new();
        let handle = sink.clone();

        sink.log("Rented vehicle id=1");
        sink.log("Vehicle id=1 returned");

        assert_eq!(handle.entries().len(), 2);
        assert!(handle.contains("returned"));
    }

    #[test]
    fn test_manual_clock_advance() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        let shared = clock.clone();

        clock.advance(Duration::hours(49));
        assert_eq!(shared.now(), start + Duration::hours(49));

        shared.set(start);
        assert_eq!(clock.now(), start);
    }
}
