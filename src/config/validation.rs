//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value ranges (probabilities in [0, 1], ranges ordered)
//! - Check bind addresses parse as socket addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SimConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::{IntRange, Range, SimConfig};

/// A single semantic problem found in a config.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. "traffic.slow_probability".
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized config, collecting every problem found.
pub fn validate_config(config: &SimConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_bind_address(&mut errors, "metrics.bind_address", &config.metrics.bind_address);
    check_bind_address(&mut errors, "health.bind_address", &config.health.bind_address);

    check_probability(&mut errors, "traffic.slow_probability", config.traffic.slow_probability);
    check_probability(&mut errors, "traffic.error_probability", config.traffic.error_probability);
    check_probability(&mut errors, "actions.error_probability", config.actions.error_probability);

    check_seconds_range(&mut errors, "traffic.base_latency", &config.traffic.base_latency);
    check_seconds_range(&mut errors, "traffic.slow_tail", &config.traffic.slow_tail);
    check_seconds_range(&mut errors, "traffic.pause", &config.traffic.pause);
    check_seconds_range(&mut errors, "actions.duration", &config.actions.duration);
    check_seconds_range(&mut errors, "actions.pause", &config.actions.pause);

    check_int_range(&mut errors, "traffic.active_users_delta", &config.traffic.active_users_delta);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push(errors: &mut Vec<ValidationError>, field: &str, message: String) {
    errors.push(ValidationError {
        field: field.to_string(),
        message,
    });
}

fn check_bind_address(errors: &mut Vec<ValidationError>, field: &str, address: &str) {
    if address.parse::<SocketAddr>().is_err() {
        push(errors, field, format!("not a valid socket address: {address:?}"));
    }
}

fn check_probability(errors: &mut Vec<ValidationError>, field: &str, p: f64) {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        push(errors, field, format!("probability must be within [0, 1], got {p}"));
    }
}

fn check_seconds_range(errors: &mut Vec<ValidationError>, field: &str, range: &Range) {
    if !range.min.is_finite() || !range.max.is_finite() {
        push(errors, field, "range bounds must be finite".to_string());
    } else if range.min < 0.0 {
        push(errors, field, format!("range must be non-negative, got min {}", range.min));
    } else if range.min > range.max {
        push(
            errors,
            field,
            format!("range is inverted: min {} > max {}", range.min, range.max),
        );
    }
}

fn check_int_range(errors: &mut Vec<ValidationError>, field: &str, range: &IntRange) {
    if range.min > range.max {
        push(
            errors,
            field,
            format!("range is inverted: min {} > max {}", range.min, range.max),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SimConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_bind_address() {
        let mut config = SimConfig::default();
        config.metrics.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "metrics.bind_address");
    }

    #[test]
    fn rejects_out_of_bounds_probability() {
        let mut config = SimConfig::default();
        config.traffic.error_probability = 1.5;
        config.actions.error_probability = -0.1;
        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"traffic.error_probability"));
        assert!(fields.contains(&"actions.error_probability"));
    }

    #[test]
    fn rejects_inverted_and_negative_ranges() {
        let mut config = SimConfig::default();
        config.traffic.base_latency = Range::new(2.0, 0.1);
        config.actions.pause = Range::new(-1.0, 3.0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
