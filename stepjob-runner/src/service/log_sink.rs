//! Log sink service
//!
//! The sink is the explicit logger handed to the execution service. Job log
//! records go through it instead of a process-wide logger.

use std::io::{self, Write};
use std::sync::Mutex;

use stepjob_core::domain::log::LogEntry;
use tracing::warn;

/// Destination for job log records
pub trait LogSink: Send + Sync {
    /// Writes a single log entry
    fn write(&self, entry: LogEntry);
}

/// Sink that renders each entry as one line on a writer
///
/// Defaults to stdout. Every line is flushed immediately so the batch
/// scheduler sees progress as it happens.
pub struct StdoutLogSink<W: Write + Send = io::Stdout> {
    logger_name: String,
    writer: Mutex<W>,
}

impl StdoutLogSink {
    /// Creates a sink writing to stdout
    pub fn new(logger_name: impl Into<String>) -> Self {
        Self::with_writer(logger_name, io::stdout())
    }
}

impl<W: Write + Send> StdoutLogSink<W> {
    /// Creates a sink writing to the given writer
    pub fn with_writer(logger_name: impl Into<String>, writer: W) -> Self {
        Self {
            logger_name: logger_name.into(),
            writer: Mutex::new(writer),
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Failed to lock log writer: {}", e)))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl<W: Write + Send> LogSink for StdoutLogSink<W> {
    fn write(&self, entry: LogEntry) {
        let line = entry.render(&self.logger_name);
        if let Err(e) = self.write_line(&line) {
            warn!("Failed to write log line: {}", e);
        }
    }
}
