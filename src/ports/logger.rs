use crate::domain::Error;

/// Format used for `log_now` timestamps.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Port for appending timestamped log lines.
pub trait Logger {
    /// Append one formatted line; returns the number of bytes written.
    fn log(&mut self, timestamp: &str, message: &str) -> Result<usize, Error>;

    /// Append `message` stamped with the current local time.
    fn log_now(&mut self, message: &str) -> Result<usize, Error> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.log(&timestamp, message)
    }
}
