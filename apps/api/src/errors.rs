use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::jooble::JobSourceError;
use crate::matching::matcher::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Job board unavailable")]
    JobBoardUnavailable,

    #[error("Job board error: {0}")]
    JobBoard(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// `Json` extractor whose rejections (malformed body, non-string skill labels,
/// missing content type) come back as `VALIDATION_ERROR` like every other
/// invalid input.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidArgument(msg) => AppError::Validation(msg),
        }
    }
}

impl From<JobSourceError> for AppError {
    fn from(err: JobSourceError) -> Self {
        match err {
            JobSourceError::NotConfigured => AppError::JobBoardUnavailable,
            other => AppError::JobBoard(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::JobBoardUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "JOB_BOARD_UNAVAILABLE",
                "External job search is not configured".to_string(),
            ),
            AppError::JobBoard(msg) => {
                tracing::error!("Job board error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "JOB_BOARD_ERROR",
                    "Failed to fetch jobs from the job board".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
