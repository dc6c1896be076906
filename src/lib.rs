//! Synthetic telemetry generator for monitoring labs.

pub mod config;
pub mod event;
pub mod health;
pub mod lifecycle;
pub mod observability;
pub mod sim;
pub mod sink;

pub use config::schema::SimConfig;
pub use event::generator::EventGenerator;
pub use lifecycle::Shutdown;
