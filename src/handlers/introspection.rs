//! Middleware and context showcase: expose what the annotator stored.

use std::time::Duration;

use axum::extract::Query;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::http::context::RequestContext;

/// Upper bound for the artificial delay of the context demo.
const MAX_DEMO_DELAY_MS: u64 = 2_000;

/// `GET /showcase/middleware`: echo the injected request identifier and
/// every incoming header.
pub async fn middleware_snapshot(
    Extension(context): Extension<RequestContext>,
    headers: HeaderMap,
) -> Json<Value> {
    let mut echoed = Map::new();
    for (name, value) in &headers {
        echoed.insert(
            name.as_str().to_string(),
            Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
        );
    }

    Json(json!({
        "feature": "middleware",
        "requestId": context.request_id,
        "acceptedUnixMs": context.accepted_unix_ms,
        "headers": echoed,
        "note": "The request id was issued by middleware before this handler ran; \
                 the same id comes back in the x-request-id response header.",
    }))
}

#[derive(Debug, Deserialize)]
pub struct ContextParams {
    pub delay_ms: Option<u64>,
}

/// `GET /showcase/context`: snapshot of the request-scoped state, with an
/// optional artificial delay so the elapsed-time header visibly grows.
pub async fn context_snapshot(
    Extension(context): Extension<RequestContext>,
    Query(params): Query<ContextParams>,
) -> Json<Value> {
    let applied_delay_ms = params.delay_ms.unwrap_or(0).min(MAX_DEMO_DELAY_MS);
    if applied_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(applied_delay_ms)).await;
    }

    Json(json!({
        "feature": "context",
        "requestId": context.request_id,
        "acceptedUnixMs": context.accepted_unix_ms,
        "elapsedSoFarMs": context.elapsed_ms(),
        "appliedDelayMs": applied_delay_ms,
        "note": "State created in the pre-phase is read here and again in the post-phase.",
    }))
}
