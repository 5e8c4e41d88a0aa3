//! services/api/src/web/error.rs
//!
//! The single error-to-response translation layer. Handlers produce domain
//! results or a typed `Failure`; the status-code mapping lives here and only
//! here, uniform across every endpoint:
//!
//! - `Validation` -> 400
//! - `NotFound`   -> 404
//! - `Unauthorized` -> 401
//! - `Store`      -> 500 with a generic body; full detail is logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use fitness_core::ports::PortError;
use fitness_core::validate::ValidationError;
use serde_json::json;
use tracing::error;

/// A typed request failure, keyed on error kind.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// Bad or missing input, detected before any store access.
    #[error("{0}")]
    Validation(String),

    /// Well-formed identifier, but no such record.
    #[error("{0}")]
    NotFound(String),

    /// Session check failed; a normal negative outcome, never a 500.
    #[error("{0}")]
    Unauthorized(String),

    /// Unexpected store failure. The caller gets a generic message.
    #[error("store failure")]
    Store(#[source] PortError),
}

impl Failure {
    /// Maps a port error onto a failure, substituting the endpoint's own
    /// not-found message for the store's internal one.
    pub fn from_port(not_found_message: &'static str) -> impl Fn(PortError) -> Failure {
        move |e| match e {
            PortError::NotFound(_) => Failure::NotFound(not_found_message.to_string()),
            PortError::Unauthorized => Failure::Unauthorized("Please login first".to_string()),
            other => Failure::Store(other),
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(e: ValidationError) -> Self {
        Failure::Validation(e.0)
    }
}

impl From<PortError> for Failure {
    fn from(e: PortError) -> Self {
        match e {
            PortError::NotFound(msg) => Failure::NotFound(msg),
            PortError::Unauthorized => Failure::Unauthorized("Please login first".to_string()),
            other => Failure::Store(other),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Failure::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Failure::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Failure::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Failure::Store(e) => {
                // Never leak internal detail to the client.
                error!(error = %e, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_string())
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
