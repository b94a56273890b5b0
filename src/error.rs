// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers. Every handler returns
/// `Result<T, AppError>`; the `IntoResponse` impl turns the error into a
/// JSON body of the shape `{"error": "..."}` with the matching status code.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller sent a request that fails validation.
    #[error("{0}")]
    Validation(String),

    /// Anything else that goes wrong while handling a request, e.g. a
    /// malformed JSON body.
    #[error("{0}")]
    Unexpected(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(msg) => {
                error!(message = %msg, "unexpected error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_maps_to_400() {
        let resp = AppError::Validation("No message provided".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_maps_to_500() {
        let resp = AppError::Unexpected("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
