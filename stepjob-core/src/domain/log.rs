//! Log domain types

use std::fmt;

use chrono::{DateTime, Local, Utc};

/// Timestamp layout used in rendered log lines, e.g. `2024-05-01 13:45:02,117`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A log entry from job execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Renders the entry as `<timestamp> - <logger> - <LEVEL> - <message>`
    ///
    /// The timestamp is shown in local time.
    pub fn render(&self, logger_name: &str) -> String {
        format!(
            "{} - {} - {} - {}",
            self.timestamp
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT),
            logger_name,
            self.level,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_render_layout() {
        let entry = LogEntry::info("Processing step 1/5");
        let line = entry.render("stepjob_runner");

        let parts: Vec<&str> = line.splitn(4, " - ").collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], "stepjob_runner");
        assert_eq!(parts[2], "INFO");
        assert_eq!(parts[3], "Processing step 1/5");
        // YYYY-MM-DD HH:MM:SS,mmm
        assert_eq!(parts[0].len(), 23);
        assert_eq!(&parts[0][19..20], ",");
    }

    #[test]
    fn test_render_error_level() {
        let entry = LogEntry::error("Error processing job: disk full");
        let line = entry.render("worker");

        assert!(line.ends_with(" - worker - ERROR - Error processing job: disk full"));
    }

    #[test]
    fn test_render_keeps_message_separators() {
        let entry = LogEntry::info("a - b - c");
        let line = entry.render("worker");

        assert!(line.ends_with(" - INFO - a - b - c"));
    }
}
