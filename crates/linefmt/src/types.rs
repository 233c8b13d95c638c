//! Core types for the formatting toolkit.
//!
//! This module provides:
//! - [`LogLevel`]: Severity levels with display names and short codes
//! - [`LogRecord`]: Structured log event with source location metadata
//! - [`LogRecordBuilder`]: Validated construction of records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Log severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Detailed debugging information
    Debug = 0,
    /// General information
    Info = 1,
    /// Warning conditions
    Warning = 2,
    /// Error conditions
    Error = 3,
    /// Unrecoverable failures
    Critical = 4,
}

impl LogLevel {
    /// Returns the uppercase display name of this level.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns the single-character code of this level (first letter of the name).
    #[must_use]
    pub const fn short_code(&self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Critical => 'C',
        }
    }

    /// Returns true if this level is at least as severe as the given level.
    #[must_use]
    pub fn is_at_least(&self, level: Self) -> bool {
        *self >= level
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A structured log event.
///
/// Records are owned by the logging pipeline; formatters read built-in
/// fields and attach derived display fields to the `fields` map. Attaching
/// is additive: existing entries are never removed, though an entry of the
/// same name is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Severity level
    pub level: LogLevel,
    /// Pre-rendered log message
    pub message: String,
    /// Source file that emitted the event
    pub file: String,
    /// Source line number
    pub line: u32,
    /// Function that emitted the event
    pub function: String,
    /// Additional named fields, including derived display fields
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Creates a new record builder.
    #[must_use]
    pub fn builder() -> LogRecordBuilder {
        LogRecordBuilder::default()
    }

    /// Resolves a template field name to its display text.
    ///
    /// Built-in names (`timestamp`, `level`, `message`, `file`, `line`,
    /// `function`) resolve first, then the `fields` map. JSON string values
    /// render unquoted; other values render as compact JSON. Returns `None`
    /// for names the record does not have.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "timestamp" => Some(Cow::Owned(
                self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            )),
            "level" => Some(Cow::Borrowed(self.level.name())),
            "message" => Some(Cow::Borrowed(&self.message)),
            "file" => Some(Cow::Borrowed(&self.file)),
            "line" => Some(Cow::Owned(self.line.to_string())),
            "function" => Some(Cow::Borrowed(&self.function)),
            _ => self.fields.get(name).map(|value| match value {
                serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            }),
        }
    }

    /// Attaches a named field to the record.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.fields.insert(name.into(), value.into());
    }
}

/// Builder for constructing log records.
#[derive(Debug, Default)]
pub struct LogRecordBuilder {
    timestamp: Option<DateTime<Utc>>,
    level: Option<LogLevel>,
    message: Option<String>,
    file: Option<String>,
    line: Option<u32>,
    function: Option<String>,
    fields: HashMap<String, serde_json::Value>,
}

impl LogRecordBuilder {
    /// Sets the timestamp.
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub const fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source file.
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the source line number.
    #[must_use]
    pub const fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the function name.
    #[must_use]
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Adds an extra named field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Builds the record, returning an error if required fields are missing.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingField`](crate::error::FormatError::MissingField)
    /// if any required field is not set.
    pub fn build(self) -> Result<LogRecord, crate::error::FormatError> {
        let timestamp = self
            .timestamp
            .ok_or(crate::error::FormatError::MissingField("timestamp"))?;
        let level = self
            .level
            .ok_or(crate::error::FormatError::MissingField("level"))?;
        let message = self
            .message
            .ok_or(crate::error::FormatError::MissingField("message"))?;
        let file = self
            .file
            .ok_or(crate::error::FormatError::MissingField("file"))?;
        let line = self
            .line
            .ok_or(crate::error::FormatError::MissingField("line"))?;
        let function = self
            .function
            .ok_or(crate::error::FormatError::MissingField("function"))?;

        Ok(LogRecord {
            timestamp,
            level,
            message,
            file,
            line,
            function,
            fields: self.fields,
        })
    }
}
