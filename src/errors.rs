use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-pipeline failures. Only the missing prompt is a client error;
/// configuration, upstream, parse and packaging failures all surface as a
/// 500 whose body carries the error text as-is.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No prompt provided")] EmptyPrompt,
    #[error("No API key configured")] NotConfigured,
    #[error("{0}")] Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyPrompt => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
