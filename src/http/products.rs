//! Product endpoints.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::catalog::{Product, ProductId};
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// `POST /productos`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = payload?;
    let product = state.catalog.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /productos`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_products().await)
}

/// `GET /productos/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_product(id).await?))
}
