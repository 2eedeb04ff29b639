//! Bounded in-memory activity log.
//!
//! Entries are plain strings of the form `[HH:MM:SS] message`, newest
//! first. The buffer never grows past [`LOG_CAPACITY`]; the oldest entry is
//! dropped on overflow. Appending must never disturb the action it is
//! attached to, so the fallible formatting path is swallowed and only
//! reported through `tracing`.

use chrono::Local;
use std::collections::VecDeque;
use std::fmt::Write as _;
use thiserror::Error;

/// Maximum number of retained entries.
pub const LOG_CAPACITY: usize = 50;

/// A log entry could not be formatted and was dropped.
#[derive(Debug, Error)]
#[error("failed to format log entry: {0}")]
pub struct LogWriteError(#[from] std::fmt::Error);

#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<String>,
    timestamp_format: String,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_timestamp_format("%H:%M:%S")
    }

    /// The format string comes from user config and is not validated up
    /// front; a bad specifier surfaces as a `LogWriteError` on append.
    pub fn with_timestamp_format(format: impl Into<String>) -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
            timestamp_format: format.into(),
        }
    }

    /// Timestamp `message` and push it to the front, dropping the tail if
    /// the buffer is full. Never fails visibly: a formatting fault is
    /// logged diagnostically and the entry is discarded.
    pub fn append(&mut self, message: &str) {
        if let Err(err) = self.try_append(message) {
            tracing::warn!(%err, message, "dropping unformattable log entry");
        }
    }

    fn try_append(&mut self, message: &str) -> Result<(), LogWriteError> {
        let mut entry = String::new();
        write!(
            entry,
            "[{}] {}",
            Local::now().format(&self.timestamp_format),
            message
        )?;
        self.entries.push_front(entry);
        self.entries.truncate(LOG_CAPACITY);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_prepends_and_timestamps() {
        let mut log = LogBuffer::new();
        log.append("first");
        log.append("second");

        assert_eq!(log.len(), 2);
        let newest = log.get(0).unwrap();
        let oldest = log.get(1).unwrap();
        assert!(newest.ends_with("] second"), "got {newest:?}");
        assert!(oldest.ends_with("] first"), "got {oldest:?}");
        // "[HH:MM:SS] " prefix
        assert!(newest.starts_with('['));
        assert_eq!(newest.as_bytes()[9], b']');
        assert_eq!(&newest[3..4], ":");
        assert_eq!(&newest[6..7], ":");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = LogBuffer::new();
        for i in 0..51 {
            log.append(&format!("message {i}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert!(log.get(0).unwrap().ends_with("] message 50"));
        // the very first append fell off the tail
        assert!(log.iter().all(|e| !e.ends_with("] message 0")));
        assert!(log.get(49).unwrap().ends_with("] message 1"));
    }

    #[test]
    fn test_bad_timestamp_format_is_swallowed() {
        // "%!" is not a valid chrono specifier; the entry is dropped,
        // not panicked on.
        let mut log = LogBuffer::with_timestamp_format("%!");
        log.append("ignored");
        assert!(log.is_empty());
    }
}
