use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use error::{AppError, ErrorResponse};

/// HTTP wrapper around [`AppError`]
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_client_error() {
            tracing::warn!(status = status.as_u16(), "Rejected request: {}", self.0);
        } else {
            tracing::error!(
                status = status.as_u16(),
                code = self.0.code(),
                "GCD request failed: {}",
                self.0
            );
        }

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
