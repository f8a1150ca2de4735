//! Order subsystem.
//!
//! Orders reference products by id. The store trusts its caller: product
//! references are resolved against the catalog before they reach it.

pub mod order;
pub mod store;

pub use order::{Order, OrderId};
pub use store::OrderStore;
