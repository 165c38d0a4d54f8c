//! Validation showcase: hand-rolled field checks over a JSON body.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::validation::{validate_record, ValidationOutcome};

/// `POST /showcase/validation`: validate `{name, email, age?}`.
///
/// The raw body is taken as bytes so an unparseable payload can be
/// reported as a single problem on the synthetic `body` field instead
/// of a framework-shaped rejection.
pub async fn submit(body: Bytes) -> (StatusCode, Json<ValidationOutcome>) {
    let outcome = match serde_json::from_slice::<Value>(&body) {
        Ok(record) => validate_record(&record),
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting unparseable validation body");
            ValidationOutcome::malformed_body("body is not valid JSON")
        }
    };

    let status = if outcome.valid {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome))
}
