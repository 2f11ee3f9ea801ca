use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::format::FormatError;
use crate::assessment::parse::ParseError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Pipeline failures (completion, model response, database) are logged with
/// full detail server-side and surfaced to the caller as generic messages.
/// Raw model text and provider error bodies never cross the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown question id {0} in assessment answers")]
    MissingQuestion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Completion error: {0}")]
    Completion(#[from] LlmError),

    #[error("Model response error: {0}")]
    ModelResponse(#[from] ParseError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FormatError> for AppError {
    fn from(e: FormatError) -> Self {
        match e {
            FormatError::MissingQuestion(id) => AppError::MissingQuestion(id),
            FormatError::UnsupportedAnswer(id) => AppError::Validation(format!(
                "Answer for question {id} must be a string or an array of strings"
            )),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingQuestion(id) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Question with ID {id} not found"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Completion(e) => {
                tracing::error!("Completion call failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI_PROCESSING_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::ModelResponse(e) => {
                // Raw model output is kept in server-side diagnostics only.
                match e {
                    ParseError::Malformed { raw, .. } => {
                        tracing::error!(raw_response = %raw, "Model returned unparseable output: {e}")
                    }
                    ParseError::SchemaViolation(_) => {
                        tracing::error!("Model response failed validation: {e}")
                    }
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI_PROCESSING_ERROR",
                    "An AI processing error occurred".to_string(),
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
