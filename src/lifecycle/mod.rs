//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Metrics exporter → Catalog state → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic arrives only once state exists
//! - Catalog contents live only as long as the process

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
