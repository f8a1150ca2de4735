//! Product record.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Integer identity of a product, supplied by the caller.
pub type ProductId = i64;

/// A catalog product. Immutable once inserted into the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nombre: Option<String>,
    /// Echoed exactly as received, integer or float.
    pub valor: Option<Number>,
    pub peso: Option<Number>,
    pub descripcion: Option<String>,
}

impl Product {
    /// Create a product carrying only its id.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            nombre: None,
            valor: None,
            peso: None,
            descripcion: None,
        }
    }

    /// Set the display name.
    pub fn with_nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }
}
