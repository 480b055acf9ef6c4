use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// User-facing request failures. The body is always `{"error": "..."}`;
/// sanitization itself never fails, so everything here originates in
/// validation or in the generation stage.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid or unclear instructions provided")]
    BadInstructions,

    #[error("Service is currently experiencing high demand. Please try again in a few minutes.")]
    Overloaded,

    #[error("diagram generation failed: {0}")]
    Generation(selkie::Error),
}

impl From<selkie::Error> for ApiError {
    fn from(err: selkie::Error) -> Self {
        match err {
            selkie::Error::Overloaded => ApiError::Overloaded,
            err => ApiError::Generation(err),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadInstructions => StatusCode::BAD_REQUEST,
            ApiError::Overloaded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%message, "modify request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
