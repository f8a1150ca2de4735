//! Order record.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;

/// Store-assigned order identity, sequential from 1. Signed so that any
/// integer in a request path is a valid lookup key.
pub type OrderId = i64;

/// An order referencing catalog products by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub productos: Vec<ProductId>,
}
