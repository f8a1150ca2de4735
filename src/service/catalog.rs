//! Validation glue between request bodies and the two stores.

use serde_json::Value;

use crate::catalog::{Product, ProductId, ProductIndex, UnbalancedTree};
use crate::orders::{Order, OrderId, OrderStore};
use crate::service::error::CatalogError;
use crate::service::payload;

/// Product index plus order store, validated as a unit.
#[derive(Debug)]
pub struct Catalog {
    products: Box<dyn ProductIndex>,
    orders: OrderStore,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_index(Box::new(UnbalancedTree::new()))
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog over a specific index implementation.
    pub fn with_index(products: Box<dyn ProductIndex>) -> Self {
        Self {
            products,
            orders: OrderStore::new(),
        }
    }

    pub fn create_product(&mut self, body: &Value) -> Result<Product, CatalogError> {
        let product = payload::product_from_json(body)?;
        if self.products.contains(product.id) {
            return Err(CatalogError::Conflict(product.id));
        }

        self.products
            .insert(product.clone())
            .map_err(|dup| CatalogError::Conflict(dup.0.id))?;
        Ok(product)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products.list_in_order()
    }

    pub fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .find(id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn create_order(&mut self, body: &Value) -> Result<Order, CatalogError> {
        let productos = self.resolve_products(body)?;
        Ok(self.orders.append(productos))
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.list_all()
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order, CatalogError> {
        self.orders
            .find(id)
            .cloned()
            .ok_or(CatalogError::OrderNotFound(id))
    }

    /// Replace an order's products. An absent order wins over an invalid body.
    pub fn update_order(&mut self, id: OrderId, body: &Value) -> Result<Order, CatalogError> {
        if self.orders.find(id).is_none() {
            return Err(CatalogError::OrderNotFound(id));
        }

        let productos = self.resolve_products(body)?;
        self.orders
            .update(id, productos)
            .ok_or(CatalogError::OrderNotFound(id))
    }

    pub fn delete_order(&mut self, id: OrderId) -> Result<(), CatalogError> {
        if self.orders.remove(id) {
            Ok(())
        } else {
            Err(CatalogError::OrderNotFound(id))
        }
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Walk `productos` in order, failing on the first element that is not an
    /// integer or not a known product.
    fn resolve_products(&self, body: &Value) -> Result<Vec<ProductId>, CatalogError> {
        let list = payload::product_list(body)?;
        let mut productos = Vec::with_capacity(list.len());
        for element in list {
            let id = payload::product_id(element)?;
            if !self.products.contains(id) {
                return Err(CatalogError::UnknownProduct(id));
            }
            productos.push(id);
        }
        Ok(productos)
    }
}
