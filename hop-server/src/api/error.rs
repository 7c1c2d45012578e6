//! API error mapping
//!
//! Every error reaches the caller as a JSON body with a machine-readable
//! `error` kind and a human-readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use hop_common::index::ResultKind;
use hop_common::Error;

/// Result alias for API handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning planner errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, body) = match self.0 {
            Error::UnknownObjectives(ids) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "unknown_objectives",
                    "message": message,
                    "unknown_objectives": ids,
                }),
            ),
            Error::RecordNotFound { kind, objectives } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": not_found_kind(kind),
                    "message": message,
                    "objectives": objectives,
                }),
            ),
            // Load and config errors are startup-fatal; anything arriving
            // here mid-flight is an internal fault.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "internal",
                    "message": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

fn not_found_kind(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Interference => "interference_not_found",
        ResultKind::Physiology => "physiology_not_found",
    }
}
