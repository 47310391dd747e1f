use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{Error, Object};
use crate::ports::Logger;

/// Timestamp substituted when the caller provides an empty one.
const BLANK_TIMESTAMP: &str = "00-00-0000 00:00:00";

/// Message substituted when the caller provides an empty one.
const BLANK_MESSAGE: &str = "Blank message.";

/// Separator between the timestamp and the message.
const SEPARATOR: &str = " := ";

/// Appends timestamped lines to a log file.
///
/// The file is opened for appending at construction; an unopenable path is
/// a construction error, not a deferred one.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    file: File,
}

impl FileLogger {
    /// Open `path` for appending, creating the file if absent.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| Error::LogFileUnavailable { path: path.to_path_buf(), source })?;
        Ok(Self { path: path.to_path_buf(), file })
    }

    /// Path this logger appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn log(&mut self, timestamp: &str, message: &str) -> Result<usize, Error> {
        let timestamp = if timestamp.is_empty() { BLANK_TIMESTAMP } else { timestamp };
        let message = if message.is_empty() { BLANK_MESSAGE } else { message };
        let line = format!("{}{}{}\n", timestamp, SEPARATOR, message);
        self.file.write_all(line.as_bytes())?;
        Ok(line.len())
    }
}

impl Object for FileLogger {}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn log_path(temp: &TempDir) -> PathBuf {
        temp.path().join("framework.log")
    }

    #[test]
    fn log_appends_one_formatted_line() {
        let temp = TempDir::new().unwrap();
        let mut logger = FileLogger::open(&log_path(&temp)).unwrap();

        let written = logger.log("01-06-2012 09:30:00", "Request routed").unwrap();

        let content = fs::read_to_string(log_path(&temp)).unwrap();
        assert_eq!(content, "01-06-2012 09:30:00 := Request routed\n");
        assert_eq!(written, content.len());
    }

    #[test]
    fn blank_inputs_are_substituted() {
        let temp = TempDir::new().unwrap();
        let mut logger = FileLogger::open(&log_path(&temp)).unwrap();

        logger.log("", "").unwrap();

        let content = fs::read_to_string(log_path(&temp)).unwrap();
        assert_eq!(content, "00-00-0000 00:00:00 := Blank message.\n");
    }

    #[test]
    fn reopened_logger_appends_after_existing_lines() {
        let temp = TempDir::new().unwrap();

        let mut first = FileLogger::open(&log_path(&temp)).unwrap();
        first.log("01-06-2012 09:30:00", "first").unwrap();
        drop(first);

        let mut second = FileLogger::open(&log_path(&temp)).unwrap();
        second.log("01-06-2012 09:31:00", "second").unwrap();

        let content = fs::read_to_string(log_path(&temp)).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn log_now_stamps_with_separator() {
        let temp = TempDir::new().unwrap();
        let mut logger = FileLogger::open(&log_path(&temp)).unwrap();

        logger.log_now("stamped").unwrap();

        let content = fs::read_to_string(log_path(&temp)).unwrap();
        assert!(content.contains(" := stamped"));
    }

    #[test]
    fn unopenable_path_is_a_construction_error() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened as an append-mode file.
        let result = FileLogger::open(temp.path());
        assert!(matches!(result, Err(Error::LogFileUnavailable { .. })));
    }
}
