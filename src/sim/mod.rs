//! Simulator loops.
//!
//! # Data Flow
//! ```text
//! traffic.rs:  EventGenerator → RequestEvent → MetricSink (every cycle)
//! actions.rs:  EventGenerator → ActionEvent  → LogSink    (every cycle)
//! ```
//!
//! Each loop runs as an independent Tokio task, sleeps a randomized
//! interval between cycles, and exits at its next wake-up check after
//! the shutdown signal fires. The sleep is the only suspension point.

pub mod actions;
pub mod traffic;

pub use actions::ActionSimulator;
pub use traffic::TrafficSimulator;
