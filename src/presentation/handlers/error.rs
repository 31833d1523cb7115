use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

const INTERNAL_ERROR_MESSAGE: &str = "Translation pipeline failed";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure surfaced over HTTP. Server-side causes are logged, never returned.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Pipeline(PipelineError),
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        ApiError::Pipeline(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Pipeline(error) if error.is_client_error() => {
                tracing::warn!(kind = error.kind(), error = %error, "Rejected upload");
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            ApiError::Pipeline(error) => {
                let cause = std::error::Error::source(&error).map(ToString::to_string);
                tracing::error!(
                    kind = error.kind(),
                    error = %error,
                    cause = ?cause,
                    "Pipeline run failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
