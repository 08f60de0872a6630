//! Maps store errors onto HTTP responses, one status per error kind.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use liftlog::error::StoreError;
use log::error;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

pub struct ApiError(StoreError);

impl ApiError {
    pub fn bad_request(msg: &str) -> Self {
        ApiError(StoreError::bad_request(msg))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            StoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            StoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            StoreError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            StoreError::Internal(msg) => {
                error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            StoreError::Database(err) => {
                error!("database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
