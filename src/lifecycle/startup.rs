//! Startup orchestration.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Fatal errors while bringing the service up or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Run the service with a validated configuration until a shutdown signal.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config)
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}
