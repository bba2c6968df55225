use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::status_name;
use models::ErrorInfo;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response carrying an `ErrorInfo` body.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub path: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, path: path.into(), message: message.into() }
    }

    /// 404 for NotFound, 422 for InvalidInput, 500 for everything else.
    pub fn from_service(err: ServiceError, path: impl Into<String>) -> Self {
        let status = match &err {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Unexpected { .. } | ServiceError::NotImplemented(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, path, err.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), path = %self.path, error = %self.message, "request failed");
        }
        let body = ErrorInfo::new(status_name(self.status), self.path, self.message);
        (self.status, Json(body)).into_response()
    }
}
