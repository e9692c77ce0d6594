// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::StoreError;
use crate::schema::ValidationFailure;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level failure. The wire contract collapses every variant into a
/// 400 response carrying only a "detail" message; the variants keep the
/// caller-error vs store-error distinction for logs and tests.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationFailure),
    Store(StoreError),
}

impl ApiError {
    /// Client-facing message
    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation(failure) => failure.to_string(),
            ApiError::Store(err) => err.to_string(),
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::Validation(failure)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Store(err) = &self {
            tracing::error!("store error surfaced to client: {err}");
        }

        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": self.detail() })),
        )
            .into_response()
    }
}
