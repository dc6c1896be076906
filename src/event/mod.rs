//! Synthetic event generation subsystem.
//!
//! # Data Flow
//! ```text
//! injected RNG
//!     → generator.rs (uniform draws, probability thresholds)
//!     → types.rs (RequestEvent / ActionEvent)
//!     → simulator loops → sinks
//! ```
//!
//! # Design Decisions
//! - The random source is a constructor parameter, so tests can
//!   substitute a seeded or scripted stream
//! - Events are immutable once generated and discarded after recording
//! - The error invariant (error type present iff errored) is encoded
//!   structurally with Option

pub mod generator;
pub mod types;

pub use generator::EventGenerator;
pub use types::{Action, ActionEvent, Endpoint, ErrorKind, Method, RequestEvent};
