use crate::models::MessageResponse;
use axum::{http::StatusCode, Json};
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method Not Allowed".to_string(),
        }
    }

    /// Read failures are logged in full; clients only get a generic message.
    pub fn storage_read(err: StoreError) -> Self {
        error!("failed to read log store: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Error reading from storage".to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = MessageResponse {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
