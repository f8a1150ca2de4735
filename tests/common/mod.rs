//! Shared utilities for integration tests.

use std::net::SocketAddr;

use catalog_service::config::ServiceConfig;
use catalog_service::http::HttpServer;
use catalog_service::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running service on an ephemeral local port.
pub struct TestService {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a fresh service with default configuration.
pub async fn start_service() -> TestService {
    start_service_with(ServiceConfig::default()).await
}

/// Start a fresh service; the bind address is replaced by an ephemeral port.
#[allow(dead_code)]
pub async fn start_service_with(mut config: ServiceConfig) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestService { addr, client, shutdown }
}
