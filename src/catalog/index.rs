//! Product index contract.
//!
//! Callers only depend on this trait, so a self-balancing tree can replace
//! [`UnbalancedTree`](crate::catalog::tree::UnbalancedTree) without touching
//! the catalog or the handlers.

use std::fmt;

use crate::catalog::product::{Product, ProductId};

/// Returned by [`ProductIndex::insert`] when the id is already indexed.
/// The rejected product is handed back to the caller.
#[derive(Debug)]
pub struct DuplicateProduct(pub Product);

impl fmt::Display for DuplicateProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product {} is already indexed", self.0.id)
    }
}

impl std::error::Error for DuplicateProduct {}

/// Ordered index of products keyed by id.
pub trait ProductIndex: Send + Sync + std::fmt::Debug {
    /// Insert a product. Fails without modifying the index if the id exists.
    fn insert(&mut self, product: Product) -> Result<(), DuplicateProduct>;

    /// Exact-id lookup.
    fn find(&self, id: ProductId) -> Option<&Product>;

    /// All products in ascending id order.
    fn list_in_order(&self) -> Vec<Product>;

    /// Number of indexed products.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }
}
