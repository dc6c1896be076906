//! Telemetry sinks.
//!
//! # Data Flow
//! ```text
//! simulator loops produce events:
//!     → metrics.rs (counters, gauges, histograms → Prometheus registry)
//!     → logs.rs (structured records → JSON lines)
//! ```
//!
//! # Design Decisions
//! - Sinks are explicitly constructed and injected into the loops, not
//!   process-wide singletons, so tests can substitute recording fakes
//! - Writes are best-effort: a failed write is reported to the caller,
//!   never retried by the sink itself
//! - All sink operations are safe for concurrent use

pub mod logs;
pub mod metrics;

pub use logs::{JsonLineSink, LogLevel, LogRecord, LogSink};
pub use metrics::{MetricSink, PrometheusSink};

use thiserror::Error;

/// Failure while handing an event to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    #[error("log writer lock poisoned")]
    Poisoned,
}
