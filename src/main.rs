//! catalog-service
//!
//! In-memory product catalog and order API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ http (axum router + middleware)
//!                  │
//!                  ▼
//!              service (CatalogService: RwLock<Catalog>, payload validation)
//!                  │
//!          ┌───────┴────────┐
//!          ▼                ▼
//!      catalog          orders
//!   (product BST)   (ordered order store)
//! ```
//!
//! Cross-cutting: config (TOML + validation), observability (tracing,
//! Prometheus metrics), lifecycle (startup, signals, graceful shutdown).

use std::path::PathBuf;

use catalog_service::config::{load_config, validate_config, ConfigError, ServiceConfig};
use catalog_service::lifecycle::startup;
use catalog_service::observability::logging;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-service", version, about = "In-memory product catalog and order API")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
