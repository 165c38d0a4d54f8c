//! Shared utilities for integration testing.

use tokio::net::TcpListener;
use web_showcase::{HttpServer, Shutdown, ShowcaseConfig};

/// Bind an ephemeral port, spawn the real server on it, and return the
/// base URL plus the shutdown handle keeping it alive.
pub async fn spawn_server(config: ShowcaseConfig) -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{addr}"), shutdown)
}

/// Default config with a fast stream cadence so suites finish quickly.
#[allow(dead_code)]
pub fn fast_config() -> ShowcaseConfig {
    let mut config = ShowcaseConfig::default();
    config.streaming.line_interval_ms = 60;
    config.streaming.event_interval_ms = 40;
    config
}

/// HTTP client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
