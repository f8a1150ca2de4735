//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the catalog service produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - Metrics are cheap and safe to record without an exporter

pub mod logging;
pub mod metrics;
