//! Request-scoped context annotation.
//!
//! # Responsibilities
//! - Issue a process-unique request identifier as early as possible
//! - Record the request start time
//! - Stamp identifier and elapsed-time headers on every response
//! - Feed per-request metrics from the post-phase
//!
//! # Design Decisions
//! - Identifier is an atomic sequence plus wall-clock millis; uniqueness
//!   within the process lifetime is the requirement, not unpredictability
//! - Context travels in request extensions, created before the inner
//!   handler runs and read again after it returns
//! - Headers are attached to error and preflight responses too, since
//!   the annotator wraps those layers

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use crate::emitters::unix_millis;
use crate::observability::metrics;

/// Response header carrying the request identifier.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Response header carrying the elapsed handling time in milliseconds.
pub const X_ELAPSED_MS: &str = "x-elapsed-ms";

/// Process-wide sequence feeding identifier uniqueness.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// State created at the start of one request and discarded at its end.
#[derive(Clone, Debug)]
pub struct RequestContext {
    /// Process-unique identifier, e.g. `req-1985f3a2c40-17`.
    pub request_id: String,

    /// Monotonic start instant, basis for the elapsed-time header.
    pub started_at: Instant,

    /// Wall-clock acceptance time in unix millis, for echo payloads.
    pub accepted_unix_ms: u64,
}

impl RequestContext {
    /// Issue a fresh context with the next sequence number.
    pub fn issue() -> Self {
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let accepted_unix_ms = unix_millis();
        Self {
            request_id: format!("req-{accepted_unix_ms:x}-{sequence}"),
            started_at: Instant::now(),
            accepted_unix_ms,
        }
    }

    /// Fractional milliseconds since the pre-phase ran. Always >= 0.
    pub fn elapsed_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }
}

/// Pre/post request hook wrapping every handler.
///
/// Pre-phase: issue a [`RequestContext`] and insert it into the request
/// extensions. Post-phase: stamp the identifier and elapsed-time headers
/// on the response and record request metrics.
pub async fn annotate_request(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext::issue();
    let method = req.method().clone();
    let route = req.uri().path().to_string();

    tracing::debug!(
        request_id = %context.request_id,
        method = %method,
        route = %route,
        "Request accepted"
    );

    req.extensions_mut().insert(context.clone());
    let mut response = next.run(req).await;

    let elapsed_ms = context.elapsed_ms();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&context.request_id) {
        headers.insert(HeaderName::from_static(X_REQUEST_ID), value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed_ms:.2}")) {
        headers.insert(HeaderName::from_static(X_ELAPSED_MS), value);
    }

    metrics::record_request(method.as_str(), response.status().as_u16(), &route, elapsed_ms);

    tracing::debug!(
        request_id = %context.request_id,
        status = response.status().as_u16(),
        elapsed_ms = elapsed_ms,
        "Response annotated"
    );

    response
}
