//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SimConfig (validated, immutable)
//!     → handed by value to the servers and simulator loops
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults matching the classic demo constants, so a
//!   missing config file yields a working simulator
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ActionsConfig, HealthConfig, IntRange, MetricsConfig, ObservabilityConfig, Range, SimConfig,
    TrafficConfig,
};
