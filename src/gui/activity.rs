//! Activity log events shown in the GUI.

use chrono::{DateTime, Utc};

/// The kind of activity event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEventKind {
    /// Normal activity (saves, theme changes)
    System,
    /// Something went wrong
    Error,
}

/// A timestamped activity event
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: LogEventKind,
    pub message: String,
}

impl LogEvent {
    fn new(kind: LogEventKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        }
    }

    /// Create a system event
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::System, message)
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::Error, message)
    }
}
