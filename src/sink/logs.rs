//! Structured log emission.
//!
//! # Responsibilities
//! - Represent structured log records independent of any backend
//! - Serialize records as one JSON object per line
//!
//! # Design Decisions
//! - Records carry their structured fields explicitly; the sink adds
//!   timestamp, level, and logger name at emit time
//! - The JSON-line format mirrors what log aggregation stacks ingest:
//!   timestamp (RFC-3339 UTC), level, logger, message, plus fields

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::sink::SinkError;

/// Severity of a structured log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A structured log record ready for emission.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<(&'static str, Value)>,
}

impl LogRecord {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Attach a structured field.
    pub fn field(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((key, value.into()));
        self
    }
}

/// Capability for emitting structured log records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError>;
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        (**self).emit(record)
    }
}

/// Log sink that writes one JSON object per line.
pub struct JsonLineSink<W> {
    logger: String,
    writer: Mutex<W>,
}

impl JsonLineSink<io::Stdout> {
    /// JSON-line sink over stdout, the usual target for log scrapers.
    pub fn stdout(logger: &str) -> Self {
        Self::new(logger, io::stdout())
    }
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(logger: &str, writer: W) -> Self {
        Self {
            logger: logger.to_string(),
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> LogSink for JsonLineSink<W> {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        let mut object = serde_json::Map::new();
        object.insert(
            "timestamp".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        object.insert("level".to_string(), record.level.as_str().into());
        object.insert("logger".to_string(), self.logger.as_str().into());
        object.insert("message".to_string(), record.message.as_str().into());
        for (key, value) in &record.fields {
            object.insert((*key).to_string(), value.clone());
        }

        let line = serde_json::to_string(&object)?;
        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writeln!(writer, "{line}")?;
        Ok(())
    }
}
