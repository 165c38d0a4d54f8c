//! Web Framework Feature Showcase
//!
//! An educational backend built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                SHOWCASE SERVICE                │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ annotator │──▶│ showcase │  │
//!                    │  │ server  │   │ pre-phase │   │ handler  │  │
//!                    │  └─────────┘   └───────────┘   └────┬─────┘  │
//!                    │                                     │        │
//!   Client Response  │  ┌───────────┐   ┌───────────┐      │        │
//!   ◀────────────────┼──│ annotator │◀──│   fault   │◀─────┘        │
//!                    │  │post-phase │   │ responder │ (errors only) │
//!                    │  └───────────┘   └───────────┘               │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns         │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌────────┐ │  │
//!                    │  │  │ config │ │observability│ │lifecycle│ │  │
//!                    │  │  └────────┘ └─────────────┘ └────────┘ │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └───────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use web_showcase::config::loader;
use web_showcase::lifecycle::{wait_for_signal, Shutdown};
use web_showcase::observability::{logging, metrics};
use web_showcase::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the configured level applies
    let config = loader::load()?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        allowed_origin = %config.cors.allowed_origin,
        dev_mode = config.dev_mode,
        "web-showcase starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
