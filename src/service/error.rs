//! Error types for catalog operations.

use thiserror::Error;

use crate::catalog::ProductId;
use crate::orders::OrderId;

/// Broad category of a [`CatalogError`], used to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
}

/// Request-scoped failures. None of them are fatal to the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A required field is missing or has the wrong shape.
    #[error("{0}")]
    Validation(String),

    /// An order references a product that is not in the catalog.
    #[error("El producto con ID {0} no existe")]
    UnknownProduct(ProductId),

    /// A product with the same id already exists.
    #[error("Ya existe un producto con ID {0}")]
    Conflict(ProductId),

    #[error("Producto con ID {0} no encontrado")]
    ProductNotFound(ProductId),

    #[error("Pedido con ID {0} no encontrado")]
    OrderNotFound(OrderId),
}

impl CatalogError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("El campo '{field}' es obligatorio"))
    }

    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::Validation(format!("El campo '{field}' debe ser {expected}"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) | CatalogError::UnknownProduct(_) => ErrorKind::Validation,
            CatalogError::Conflict(_) => ErrorKind::Conflict,
            CatalogError::ProductNotFound(_) | CatalogError::OrderNotFound(_) => ErrorKind::NotFound,
        }
    }
}
