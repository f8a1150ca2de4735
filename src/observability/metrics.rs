//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_http_requests_total` (counter): requests by method, route, status
//! - `catalog_http_request_duration_seconds` (histogram): latency by method, route
//! - `catalog_products` (gauge): products in the index
//! - `catalog_orders` (gauge): orders in the store
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until an
//!   exporter is installed
//! - Routes are labelled by their matched template, not the raw path

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let route = route.to_string();

    counter!(
        "catalog_http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "catalog_http_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

/// Publish the current size of both stores.
pub fn record_catalog_size(products: usize, orders: usize) {
    gauge!("catalog_products").set(products as f64);
    gauge!("catalog_orders").set(orders as f64);
}
