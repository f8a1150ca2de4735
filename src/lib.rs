//! In-memory product catalog and order service.
//!
//! Products live in a binary search tree keyed by id; orders live in an
//! insertion-ordered store with a never-reused id counter. Both are owned by
//! a single [`CatalogService`] that the HTTP layer receives as state.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod orders;
pub mod service;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::CatalogService;
