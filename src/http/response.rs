//! Error responses.
//!
//! # Responsibilities
//! - Map catalog errors to HTTP status codes
//! - Render every failure as `{"error": "<message>"}`
//! - Fold extractor rejections (bad JSON, bad path ids) into the same shape

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::service::{CatalogError, ErrorKind};

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match err.kind() {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
        };
        tracing::debug!(status = %status, error = %err, "Request rejected");
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, format!("Cuerpo JSON inválido: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Identificador inválido: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(CatalogError::Conflict(1)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(CatalogError::UnknownProduct(1)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(CatalogError::missing_field("productos")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::from(CatalogError::ProductNotFound(1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(CatalogError::OrderNotFound(1)).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_message_is_error_display() {
        let err = ApiError::from(CatalogError::ProductNotFound(42));
        assert_eq!(err.message(), "Producto con ID 42 no encontrado");
    }
}
