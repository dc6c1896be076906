//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! simulator. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the telemetry simulator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SimConfig {
    /// Metrics exposition settings (Prometheus scrape endpoint).
    pub metrics: MetricsConfig,

    /// Health/readiness HTTP endpoint settings.
    pub health: HealthConfig,

    /// Web traffic simulation settings.
    pub traffic: TrafficConfig,

    /// User action simulation settings.
    pub actions: ActionsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Inclusive range of seconds to draw uniformly from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Inclusive range of integers to draw uniformly from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// Metrics exposition configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Enable the Prometheus scrape endpoint.
    pub enabled: bool,

    /// Scrape endpoint bind address.
    pub bind_address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Health endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Enable the health/readiness HTTP endpoint.
    pub enabled: bool,

    /// Health endpoint bind address.
    pub bind_address: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:8001".to_string(),
        }
    }
}

/// Web traffic simulation configuration.
///
/// Defaults reproduce the classic lab workload: requests take 0.1-2s,
/// 5% hit a 3-8s slow tail, 10% fail.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Run the traffic simulator loop.
    pub enabled: bool,

    /// Base request latency range in seconds.
    pub base_latency: Range,

    /// Probability that a request gets an extra slow-tail delay.
    pub slow_probability: f64,

    /// Slow-tail delay range in seconds, added on top of base latency.
    pub slow_tail: Range,

    /// Probability that a request is recorded as an error.
    pub error_probability: f64,

    /// Baseline active-user count the gauge fluctuates around.
    pub active_users_base: i64,

    /// Per-cycle fluctuation applied to the active-user baseline.
    pub active_users_delta: IntRange,

    /// Pause between simulated requests in seconds.
    pub pause: Range,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_latency: Range::new(0.1, 2.0),
            slow_probability: 0.05,
            slow_tail: Range::new(3.0, 8.0),
            error_probability: 0.10,
            active_users_base: 100,
            active_users_delta: IntRange::new(-20, 30),
            pause: Range::new(0.5, 2.0),
        }
    }
}

/// User action simulation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Run the user action simulator loop.
    pub enabled: bool,

    /// Action duration range in seconds.
    pub duration: Range,

    /// Probability that an action logs a follow-up error.
    pub error_probability: f64,

    /// Pause between simulated actions in seconds.
    pub pause: Range,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Range::new(0.1, 3.0),
            error_probability: 0.10,
            pause: Range::new(1.0, 3.0),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level for the simulator's own diagnostics
    /// (trace, debug, info, warn, error).
    pub log_level: String,

    /// Logger name stamped on simulated structured log records.
    pub logger_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            logger_name: "demo-app".to_string(),
        }
    }
}
