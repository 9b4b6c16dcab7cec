use crate::domain::ports::LogSink;
use crate::error::{RentalError, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

pub const DEFAULT_LOG_FILE: &str = "rental_log.txt";

/// Appends timestamped lines to a log file.
///
/// Each entry is written as `[YYYY-MM-DD HH:MM:SS] message` in local time and
/// flushed at the end of the line. The file is closed when the sink is dropped.
pub struct FileLogSink {
    path: PathBuf,
    writer: Mutex<LineWriter<File>>,
}

impl FileLogSink {
    /// Opens `path` for appending, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| RentalError::LogSinkUnavailable {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn log(&self, message: &str) {
        let stamp = Local::now().format("%F %T");
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "[{stamp}] {message}") {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to append to rental log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_log_sink_appends_timestamped_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOG_FILE);

        {
            let sink = FileLogSink::open(&path).unwrap();
            sink.log("Rented vehicle id=1 to member=memberC");
        }
        {
            let sink = FileLogSink::open(&path).unwrap();
            sink.log("Vehicle id=1 returned by memberC");
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] Rented vehicle id=1 to member=memberC"));
        assert!(lines[1].ends_with("] Vehicle id=1 returned by memberC"));
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_LOG_FILE);

        let result = FileLogSink::open(&path);
        assert!(matches!(
            result,
            Err(RentalError::LogSinkUnavailable { path: ref failed, .. }) if *failed == path
        ));
    }
}
