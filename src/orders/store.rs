//! Insertion-ordered order storage.
//!
//! # Responsibilities
//! - Allocate order ids from a counter that never goes backwards
//! - Keep orders in arrival order across updates and removals
//! - Look up, replace and remove orders by id
//!
//! # Design Decisions
//! - `IndexMap` gives O(1) lookups while iterating in insertion order
//! - Removal shifts later entries down so arrival order is preserved
//! - Product ids are validated by the caller, never here

use indexmap::IndexMap;

use crate::catalog::ProductId;
use crate::orders::order::{Order, OrderId};

/// Sequential store of orders.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: IndexMap<OrderId, Order>,
    /// Last id handed out; 0 means none yet.
    last_id: OrderId,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order with the next id and append it at the end.
    pub fn append(&mut self, productos: Vec<ProductId>) -> Order {
        self.last_id += 1;
        let order = Order {
            id: self.last_id,
            productos,
        };
        self.orders.insert(order.id, order.clone());
        order
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Replace the product list of an existing order in place.
    pub fn update(&mut self, id: OrderId, productos: Vec<ProductId>) -> Option<Order> {
        let order = self.orders.get_mut(&id)?;
        order.productos = productos;
        Some(order.clone())
    }

    /// Remove an order. Returns whether anything was removed.
    pub fn remove(&mut self, id: OrderId) -> bool {
        self.orders.shift_remove(&id).is_some()
    }

    /// All orders in stored order.
    pub fn list_all(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
