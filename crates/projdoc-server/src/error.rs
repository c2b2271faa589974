use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use projdoc_core::error::CoreError;
use projdoc_export::error::ExportError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Report generation failed; the message is shown to the submitter.
    Generation(String),
    /// The PDF converter is missing or not runnable.
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to show to the submitter.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Generation(msg) | ApiError::Unavailable(msg) => {
                msg.clone()
            }
            ApiError::Internal(_) => "internal server error".to_string(),
        }
    }

    /// Log server-side failures; client errors are left to the request log.
    pub fn log(&self) {
        match self {
            ApiError::BadRequest(_) => {}
            ApiError::Generation(msg) | ApiError::Unavailable(msg) => {
                tracing::error!("report generation failed: {msg}");
            }
            ApiError::Internal(msg) => tracing::error!("internal error: {msg}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::ConverterUnavailable { .. } => ApiError::Unavailable(e.to_string()),
            ExportError::Io(_) => ApiError::Internal(e.to_string()),
            other => ApiError::Generation(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
