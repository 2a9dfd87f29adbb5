//! JSON API errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tarefas_core::CoreError;
use tracing::error;

/// Error returned by `/api/*` handlers as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Sign in required")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::EmptyContent | CoreError::MissingIdentity => StatusCode::BAD_REQUEST,
            // Private tasks are reported as missing
            CoreError::TaskNotFound { .. }
            | CoreError::TaskNotPublic { .. }
            | CoreError::CommentNotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Forbidden { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %err, "API request failed");
            return Self::new(status, "Internal error");
        }

        let message = match &err {
            CoreError::TaskNotPublic { task_id } => format!("Task not found: {}", task_id),
            _ => err.to_string(),
        };
        Self::new(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}
