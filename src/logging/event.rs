// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log event: one immutable record handed from the logger to the sink

use super::Severity;
use chrono::{Local, NaiveDateTime};

/// A single log record.
///
/// Built at the moment of emission, formatted once, then dropped. The level
/// is kept as a raw number so levels outside the [`Severity`] table can still
/// be emitted (they render with a `?` letter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: u8,
    /// Local wall-clock time, microsecond precision is what gets rendered
    pub timestamp: NaiveDateTime,
    pub process_id: Option<u32>,
    pub source_file: String,
    pub source_line: u32,
    pub message: String,
}

impl LogEvent {
    /// Create an event stamped with the current local time and process id
    pub fn new(severity: Severity, source_file: &str, source_line: u32, message: &str) -> Self {
        Self::with_level(severity.as_u8(), source_file, source_line, message)
    }

    /// Create an event for a raw numeric level
    pub fn with_level(level: u8, source_file: &str, source_line: u32, message: &str) -> Self {
        Self {
            level,
            timestamp: Local::now().naive_local(),
            process_id: Some(std::process::id()),
            source_file: source_file.to_string(),
            source_line,
            message: message.to_string(),
        }
    }

    /// Replace the timestamp (used for deterministic output)
    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Replace the process id; `None` renders as `?????`
    pub fn with_process_id(mut self, process_id: Option<u32>) -> Self {
        self.process_id = process_id;
        self
    }

    /// The named severity of this event, if the level has one
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_u8(self.level)
    }
}
