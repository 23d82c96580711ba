//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use worklog_types::error::DialogueError;

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Dialogue(DialogueError),
    /// Malformed request content.
    Validation(String),
}

impl From<DialogueError> for AppError {
    fn from(e: DialogueError) -> Self {
        AppError::Dialogue(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Dialogue(DialogueError::Category(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CATEGORY_STORAGE_ERROR",
                e.to_string(),
            ),
            AppError::Dialogue(e @ DialogueError::WorkerUnavailable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "WORKER_UNAVAILABLE",
                e.to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }
        ApiResponse::<()>::error(code, &message).into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklog_types::error::CategoryError;

    #[test]
    fn test_status_mapping() {
        let storage = AppError::from(DialogueError::Category(CategoryError::Parse("x".into())));
        assert_eq!(storage.parts().0, StatusCode::INTERNAL_SERVER_ERROR);

        let gone = AppError::from(DialogueError::WorkerUnavailable("stopped".into()));
        assert_eq!(gone.parts().0, StatusCode::SERVICE_UNAVAILABLE);

        let invalid = AppError::Validation("bad".into());
        assert_eq!(invalid.parts().1, "VALIDATION_ERROR");
    }
}
