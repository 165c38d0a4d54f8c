//! Error showcase: deliberately raise each fault kind.

use axum::extract::Query;
use axum::http::Uri;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ShowcaseError, ShowcaseResult};

#[derive(Debug, Deserialize)]
pub struct FaultParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `GET /showcase/error?type={http|notfound|server}`.
///
/// Nothing is caught here: the raised fault propagates to the central
/// responder, which is the whole demonstration.
pub async fn trigger(Query(params): Query<FaultParams>) -> ShowcaseResult<Json<Value>> {
    match params.kind.as_deref() {
        Some("http") => Err(ShowcaseError::unprocessable(
            "This 422 was raised deliberately, status and message pass through unchanged",
        )),
        Some("notfound") => Err(ShowcaseError::not_found(
            "This resource is intentionally missing",
        )),
        Some("server") => Err(ShowcaseError::Unexpected(
            "simulated backend defect with internal detail the client must never see".into(),
        )),
        _ => Err(ShowcaseError::bad_request(
            "Pass ?type=http, ?type=notfound or ?type=server",
        )),
    }
}

/// Router fallback: unmatched paths go through the same known-fault path.
pub async fn not_found(uri: Uri) -> ShowcaseError {
    ShowcaseError::not_found(format!("No showcase route matches {}", uri.path()))
}
