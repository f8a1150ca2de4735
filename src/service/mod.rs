//! Catalog service: shared application state and request validation.
//!
//! # Data Flow
//! ```text
//! handler
//!     → CatalogService (lock: read for queries, write for mutations)
//!     → Catalog (payload validation, reference checks)
//!     → ProductIndex / OrderStore
//! ```
//!
//! # Design Decisions
//! - One `RwLock` guards both stores, so validating an order against the
//!   index and storing it happens atomically
//! - Readers run concurrently; each mutation holds the write lock for the
//!   whole operation
//! - State is constructed explicitly and injected; tests build their own

pub mod catalog;
pub mod error;
pub mod payload;

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

pub use catalog::Catalog;
pub use error::{CatalogError, ErrorKind};

use crate::catalog::{Product, ProductId};
use crate::observability::metrics;
use crate::orders::{Order, OrderId};

/// Cloneable handle to the single catalog instance.
#[derive(Clone, Debug, Default)]
pub struct CatalogService {
    inner: Arc<RwLock<Catalog>>,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub async fn create_product(&self, body: &Value) -> Result<Product, CatalogError> {
        let mut catalog = self.inner.write().await;
        let product = catalog.create_product(body)?;
        metrics::record_catalog_size(catalog.product_count(), catalog.order_count());
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.inner.read().await.list_products()
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.inner.read().await.get_product(id)
    }

    pub async fn create_order(&self, body: &Value) -> Result<Order, CatalogError> {
        let mut catalog = self.inner.write().await;
        let order = catalog.create_order(body)?;
        metrics::record_catalog_size(catalog.product_count(), catalog.order_count());
        tracing::info!(order_id = order.id, products = order.productos.len(), "Order created");
        Ok(order)
    }

    pub async fn list_orders(&self) -> Vec<Order> {
        self.inner.read().await.list_orders()
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, CatalogError> {
        self.inner.read().await.get_order(id)
    }

    pub async fn update_order(&self, id: OrderId, body: &Value) -> Result<Order, CatalogError> {
        let order = self.inner.write().await.update_order(id, body)?;
        tracing::info!(order_id = id, products = order.productos.len(), "Order updated");
        Ok(order)
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), CatalogError> {
        let mut catalog = self.inner.write().await;
        catalog.delete_order(id)?;
        metrics::record_catalog_size(catalog.product_count(), catalog.order_count());
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }
}
