//! Metric recording and exposition.
//!
//! # Responsibilities
//! - Define the simulator's metrics and their help text
//! - Expose a Prometheus-compatible scrape endpoint
//! - Record counters, histograms, and gauges through an injectable trait
//!
//! # Metrics
//! - `app_requests_total` (counter): total app requests by method, endpoint
//! - `app_request_duration_seconds` (histogram): request latency
//! - `app_active_users` (gauge): number of active users
//! - `app_errors_total` (counter): total application errors by error_type

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::sink::SinkError;

pub const REQUESTS_TOTAL: &str = "app_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "app_request_duration_seconds";
pub const ACTIVE_USERS: &str = "app_active_users";
pub const ERRORS_TOTAL: &str = "app_errors_total";

/// Capability for recording metrics.
///
/// The production implementation forwards to the global `metrics`
/// recorder; tests substitute an in-memory recorder.
pub trait MetricSink: Send + Sync {
    fn increment_counter(
        &self,
        name: &'static str,
        labels: &[(&'static str, &'static str)],
    ) -> Result<(), SinkError>;

    fn observe_histogram(&self, name: &'static str, value: f64) -> Result<(), SinkError>;

    fn set_gauge(&self, name: &'static str, value: f64) -> Result<(), SinkError>;
}

impl<T: MetricSink + ?Sized> MetricSink for Arc<T> {
    fn increment_counter(
        &self,
        name: &'static str,
        labels: &[(&'static str, &'static str)],
    ) -> Result<(), SinkError> {
        (**self).increment_counter(name, labels)
    }

    fn observe_histogram(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        (**self).observe_histogram(name, value)
    }

    fn set_gauge(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        (**self).set_gauge(name, value)
    }
}

/// Metric sink backed by the installed Prometheus recorder.
///
/// Registry updates are atomic and never fail; the Result in the trait
/// exists for sinks that do I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusSink;

impl PrometheusSink {
    pub fn new() -> Self {
        Self
    }
}

impl MetricSink for PrometheusSink {
    fn increment_counter(
        &self,
        name: &'static str,
        labels: &[(&'static str, &'static str)],
    ) -> Result<(), SinkError> {
        let labels: Vec<metrics::Label> = labels
            .iter()
            .map(|(key, value)| metrics::Label::new(*key, *value))
            .collect();
        metrics::counter!(name, labels).increment(1);
        Ok(())
    }

    fn observe_histogram(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        metrics::histogram!(name).record(value);
        Ok(())
    }

    fn set_gauge(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        metrics::gauge!(name).set(value);
        Ok(())
    }
}

/// Install the Prometheus recorder and start its scrape endpoint.
///
/// Must be called from within the Tokio runtime; fatal at startup if the
/// recorder cannot be installed.
pub fn install_recorder(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    metrics::describe_counter!(REQUESTS_TOTAL, "Total app requests");
    metrics::describe_histogram!(
        REQUEST_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Request latency"
    );
    metrics::describe_gauge!(ACTIVE_USERS, "Number of active users");
    metrics::describe_counter!(ERRORS_TOTAL, "Total application errors");

    tracing::info!(address = %addr, "Metrics scrape endpoint started");
    Ok(())
}
