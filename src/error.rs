// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Shown when the study text is blank.
pub const INPUT_REQUIRED_MESSAGE: &str = "Mohon masukkan pertanyaan atau materi terlebih dahulu.";

/// Fallback when the backend gives no usable explanation.
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Gagal terhubung ke server backend.";

/// Global Application Error Enum.
/// Maps request-level failures of the web surface to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict (e.g., action while a generation is in flight)
    Conflict(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Failure of one generation cycle.
///
/// These never leave the session boundary: the handler stores
/// [`GenerationError::user_message`] in the session and the input view shows it.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Blank (or oversized) input; the network is never contacted.
    #[error("{0}")]
    InvalidInput(String),

    /// Connection refused, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx answer. `message` is the backend's own `error` field, if any.
    #[error("backend answered {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Backend { status: u16, message: Option<String> },

    /// 2xx answer whose body is not a usable quiz.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

impl GenerationError {
    pub fn input_required() -> Self {
        GenerationError::InvalidInput(INPUT_REQUIRED_MESSAGE.to_string())
    }

    /// Text for the error banner of the input view.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::InvalidInput(msg) => msg.clone(),
            GenerationError::Backend {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => BACKEND_UNREACHABLE_MESSAGE.to_string(),
        }
    }
}
