//! The event record handed to sinks.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use crate::{LoggerName, Severity};

/// Structured key/value data attached to an event.
pub type Fields = serde_json::Map<String, Value>;

/// A single log event.
///
/// The payload is opaque to the registry; only `level` participates in
/// filtering. `origin` is the name the event was emitted at, which stays the
/// same while the event travels up the chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    /// Event severity
    pub level: Severity,
    /// Message text
    pub message: String,
    /// Structured fields
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub fields: Fields,
    /// Logger the event was emitted at
    pub origin: LoggerName,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(origin: LoggerName, level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Fields::new(),
            origin,
            timestamp: Utc::now(),
        }
    }

    /// Attach structured fields.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    /// Attach a single field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Override the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
