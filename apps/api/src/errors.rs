use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::letter::export::RequiredField;
use crate::letter::logo::LogoError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Export attempted with a blank required field. Only the first one is reported.
    #[error("Please fill in the {} field.", .0.words())]
    MissingField(RequiredField),

    #[error("Logo rejected: {0}")]
    Logo(#[from] LogoError),

    #[error("Too many open preview sessions (limit {0})")]
    TooManySessions(usize),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingField(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_FIELD",
                self.to_string(),
            ),
            AppError::Logo(e @ LogoError::TooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "LOGO_TOO_LARGE", e.to_string())
            }
            AppError::Logo(e) => (StatusCode::BAD_REQUEST, "INVALID_LOGO", e.to_string()),
            AppError::TooManySessions(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "TOO_MANY_SESSIONS",
                self.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if let AppError::MissingField(field) = &self {
            body["error"]["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}
