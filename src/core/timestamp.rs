//! Timestamp formatting utilities
//!
//! Used by console sinks that prefix each line with the time of the call.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use handler_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// Wall-clock time in the local zone: `10:30:45.123`
    ///
    /// Matches what browser devtools show next to console lines.
    LocalTime,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::LocalTime => datetime
                .with_timezone(&Local)
                .format("%H:%M:%S%.3f")
                .to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current instant
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
