//! Product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! POST /productos
//!     → service (payload validation, duplicate check)
//!     → ProductIndex::insert
//!
//! GET /productos[/{id}]
//!     → ProductIndex::find / list_in_order
//! ```
//!
//! # Design Decisions
//! - Products are immutable and never removed once indexed
//! - The index is a trait object so the tree implementation can be swapped
//! - The default tree is unbalanced; see [`tree`] for the cost model

pub mod index;
pub mod product;
pub mod tree;

pub use index::{DuplicateProduct, ProductIndex};
pub use product::{Product, ProductId};
pub use tree::UnbalancedTree;
