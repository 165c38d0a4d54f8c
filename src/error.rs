//! Centralized fault handling.
//!
//! # Responsibilities
//! - Define the two fault kinds every handler can raise
//! - Collapse faults into the wire response at a single point
//! - Keep internal details out of client-visible bodies
//!
//! # Design Decisions
//! - Handlers return `ShowcaseResult` and never catch their own faults
//! - Known faults echo their status and message unchanged
//! - Unknown faults always become a generic 500; the original detail
//!   goes to the server log only

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors raised while producing a showcase response.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// A fault raised deliberately with an explicit status and message.
    #[error("{message}")]
    Known {
        status: StatusCode,
        code: &'static str,
        message: String,
    },

    /// Any other failure. The detail is logged, never sent to the client.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Result type for showcase handlers.
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

impl ShowcaseError {
    /// Known fault with an arbitrary status code.
    pub fn known(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self::Known {
            status,
            code,
            message: message.into(),
        }
    }

    /// Known 400 fault.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::known(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    /// Known 404 fault.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::known(StatusCode::NOT_FOUND, "not_found", message)
    }

    /// Known 422 fault.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::known(StatusCode::UNPROCESSABLE_ENTITY, "http_error", message)
    }

    /// Status code this fault maps to on the wire.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Known { status, .. } => *status,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShowcaseError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Known {
                status,
                code,
                message,
            } => (status, code, message),
            Self::Unexpected(detail) => {
                tracing::error!(error = %detail, "Unhandled failure while producing a response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "status": status.as_u16(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fault_keeps_status_and_message() {
        let err = ShowcaseError::unprocessable("deliberate demo fault");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "deliberate demo fault");
    }

    #[test]
    fn unexpected_fault_maps_to_500() {
        let err = ShowcaseError::Unexpected("db handle on fire".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn known_fault_response_carries_structured_body() {
        let response = ShowcaseError::not_found("nothing here").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unexpected_fault_response_is_generic() {
        let response = ShowcaseError::Unexpected("secret detail".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
