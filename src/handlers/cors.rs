//! CORS showcase: describe the cross-origin policy in effect.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::http::context::{X_ELAPSED_MS, X_REQUEST_ID};
use crate::http::server::AppState;

/// `GET|OPTIONS /showcase/cors`.
///
/// Preflight OPTIONS requests carrying `Access-Control-Request-Method`
/// are answered by the CORS layer before this handler runs; everything
/// else lands here.
pub async fn cross_origin(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "feature": "cors",
        "allowedOrigin": state.config.cors.allowed_origin,
        "exposedHeaders": [X_REQUEST_ID, X_ELAPSED_MS],
        "maxAgeSecs": state.config.cors.max_age_secs,
        "note": "The exposed headers let browser scripts read the request id and timing.",
    }))
}
