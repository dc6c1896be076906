//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Install recorder → Spawn servers & loops
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!         → Shutdown::trigger (shutdown.rs)
//!         → every loop exits at its next wake-up check
//!         → main joins all tasks and returns
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
