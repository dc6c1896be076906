//! Health/readiness HTTP surface.
//!
//! Liveness and readiness probes for the simulator process, served on
//! their own port so a monitoring stack can target them independently
//! of the metrics scrape endpoint.

pub mod server;

pub use server::serve;
