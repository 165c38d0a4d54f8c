//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all showcase handlers
//! - Wire up middleware (tracing, timeout, CORS, request annotation)
//! - Bind the server to a listener and drain on shutdown
//!
//! # Design Decisions
//! - The annotator sits inside the trace layer but outside timeout and
//!   CORS, so even preflight and timeout responses carry its headers
//! - Unmatched paths fall back into the centralized fault responder

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, ShowcaseConfig};
use crate::handlers;
use crate::http::context::{annotate_request, X_ELAPSED_MS, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ShowcaseConfig>,
}

/// HTTP server for the showcase API.
pub struct HttpServer {
    router: Router,
    config: Arc<ShowcaseConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ShowcaseConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: Arc::clone(&config),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all showcase routes and middleware.
    fn build_router(config: &ShowcaseConfig, state: AppState) -> Router {
        let methods_demo = get(handlers::routing::methods)
            .post(handlers::routing::methods)
            .put(handlers::routing::methods)
            .delete(handlers::routing::methods);

        Router::new()
            .route("/health", get(handlers::health::health))
            .route("/showcase/routing/basic", get(handlers::routing::basic))
            .route("/showcase/routing/query", get(handlers::routing::query))
            .route("/showcase/routing/methods", methods_demo)
            .route(
                "/showcase/routing/{version}/{id}",
                get(handlers::routing::path_params),
            )
            .route(
                "/showcase/middleware",
                get(handlers::introspection::middleware_snapshot),
            )
            .route(
                "/showcase/context",
                get(handlers::introspection::context_snapshot),
            )
            .route(
                "/showcase/validation",
                axum::routing::post(handlers::validation::submit),
            )
            .route("/showcase/streaming", get(handlers::streaming::plain_lines))
            .route(
                "/showcase/sse",
                get(handlers::streaming::server_sent_events),
            )
            .route("/showcase/error", get(handlers::faults::trigger))
            .route(
                "/showcase/cors",
                get(handlers::cors::cross_origin).options(handlers::cors::cross_origin),
            )
            .fallback(handlers::faults::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(annotate_request))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(cors_layer(&config.cors)),
            )
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }
}

/// Cross-origin policy: one configured browser origin (or any), with the
/// annotator's headers exposed to browser scripts.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([
            HeaderName::from_static(X_REQUEST_ID),
            HeaderName::from_static(X_ELAPSED_MS),
        ])
        .max_age(Duration::from_secs(config.max_age_secs));

    if config.allowed_origin == "*" {
        return layer.allow_origin(Any);
    }
    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                origin = %config.allowed_origin,
                "Configured CORS origin is not a valid header value, allowing any origin"
            );
            layer.allow_origin(Any)
        }
    }
}
