use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::observability::STORAGE_ERRORS_TOTAL;

/// HTTP error with a `{statusCode, message, error}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<Value>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(messages: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "statusCode": self.status.as_u16(),
            "message": self.message,
        });
        // 500s only carry the generic message
        if !self.status.is_server_error() {
            if let Some(reason) = self.status.canonical_reason() {
                body["error"] = Value::from(reason);
            }
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::not_found(&msg),
            ServiceError::Storage(msg) => {
                STORAGE_ERRORS_TOTAL.inc();
                error!(error = %msg, "storage fault");
                ApiError::internal()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
