//! Order endpoints.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::orders::{Order, OrderId};

/// `POST /pedidos`
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(body) = payload?;
    let order = state.catalog.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /pedidos`
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.catalog.list_orders().await)
}

/// `GET /pedidos/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_order(id).await?))
}

/// `PUT /pedidos/{id}`
pub async fn update_order(
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id?;
    let Json(body) = payload?;
    Ok(Json(state.catalog.update_order(id, &body).await?))
}

/// `DELETE /pedidos/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    state.catalog.delete_order(id).await?;
    Ok(Json(json!({ "mensaje": format!("Pedido con ID {id} eliminado") })))
}
