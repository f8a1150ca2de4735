//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned or propagated)
//!     → products.rs / orders.rs / health.rs (extract, call the catalog service)
//!     → response.rs (errors mapped to status + {"error": ...})
//!     → Send to client
//! ```
//!
//! Handlers hold no state of their own; everything lives in the
//! [`CatalogService`](crate::service::CatalogService) carried by [`AppState`].

pub mod health;
pub mod orders;
pub mod products;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{build_router, AppState, HttpServer};
