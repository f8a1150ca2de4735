//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Bind the router to a listener and serve until shutdown

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::request::{request_id_of, UuidRequestId};
use crate::http::response::ApiError;
use crate::http::{health, orders, products};
use crate::observability::metrics;
use crate::service::CatalogService;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// HTTP server for the catalog service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server over a fresh, empty catalog.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_catalog(config, CatalogService::default())
    }

    /// Create a server over an existing catalog handle.
    pub fn with_catalog(config: ServiceConfig, catalog: CatalogService) -> Self {
        let router = build_router(&config, AppState { catalog });
        Self { router, config }
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/productos",
            get(products::list_products).post(products::create_product),
        )
        .route("/productos/{id}", get(products::get_product))
        .route("/pedidos", get(orders::list_orders).post(orders::create_order))
        .route(
            "/pedidos/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::map_response(timeout_as_error))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id_of(request),
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;
    metrics::record_request(method.as_str(), &route, response.status().as_u16(), start);
    response
}

/// `TimeoutLayer` answers with a bare 408; give it the usual error body.
async fn timeout_as_error(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::new(StatusCode::REQUEST_TIMEOUT, "Tiempo de espera agotado")
            .into_response();
    }
    response
}

async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Ruta no encontrada")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Method};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(
            &ServiceConfig::default(),
            AppState {
                catalog: CatalogService::default(),
            },
        )
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_product_conflict() {
        let app = app();
        let (status, body) = call(&app, Method::POST, "/productos", Some(json!({"id": 1, "nombre": "Pan"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["nombre"], "Pan");

        let (status, body) = call(&app, Method::POST, "/productos", Some(json!({"id": 1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Ya existe un producto con ID 1"}));
    }

    #[tokio::test]
    async fn test_missing_product_id() {
        let (status, body) = call(&app(), Method::POST, "/productos", Some(json!({"nombre": "Pan"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "El campo 'id' es obligatorio"}));
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let (status, body) = call(&app(), Method::GET, "/productos/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Producto con ID 42 no encontrado"}));
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_shape() {
        let app = app();

        let (status, body) = call(&app, Method::GET, "/productos/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/pedidos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (status, body) = call(&app, Method::GET, "/nada", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Ruta no encontrada"}));
    }

    #[tokio::test]
    async fn test_order_validation() {
        let app = app();

        let (status, body) = call(&app, Method::POST, "/pedidos", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "El campo 'productos' es obligatorio"}));

        let (status, body) = call(&app, Method::POST, "/pedidos", Some(json!({"productos": 5}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "El campo 'productos' debe ser una lista"}));

        let (status, body) = call(&app, Method::POST, "/pedidos", Some(json!({"productos": [99]}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "El producto con ID 99 no existe"}));
    }

    #[tokio::test]
    async fn test_update_absent_order() {
        let (status, body) = call(&app(), Method::PUT, "/pedidos/8", Some(json!({"productos": []}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Pedido con ID 8 no encontrado"}));
    }

    #[tokio::test]
    async fn test_timeout_uses_error_shape() {
        let timed_out = StatusCode::REQUEST_TIMEOUT.into_response();
        let response = timeout_as_error(timed_out).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Tiempo de espera agotado"}));

        let ok = timeout_as_error(StatusCode::OK.into_response()).await;
        assert_eq!(ok.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_body_over_limit_uses_error_shape() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 64;
        let app = build_router(
            &config,
            AppState {
                catalog: CatalogService::default(),
            },
        );

        let body = json!({"id": 1, "descripcion": "x".repeat(256)});
        let (status, body) = call(&app, Method::POST, "/productos", Some(body)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));

        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "fixed-id")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "fixed-id");
    }
}
