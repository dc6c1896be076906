//! Observability for the simulator process itself.
//!
//! The simulated telemetry goes through the sinks; this module covers
//! the simulator's own diagnostics (startup, shutdown, sink failures)
//! via `tracing`.

pub mod logging;
