use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::state::error::StoreError;

/// Error type for the axum service.
/// Provides an 'IntoResponse' implementation to be able to use 'Result'
/// as responses in axum.
/// See https://docs.rs/axum/latest/axum/error_handling/index.html
#[derive(Debug)]
pub enum ServiceError {
    TitleRequired,
    NotFound,
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::TitleRequired => {
                (StatusCode::BAD_REQUEST, "Title is required".to_string())
            }
            ServiceError::NotFound => (StatusCode::NOT_FOUND, "Task not found".to_string()),
            ServiceError::Internal(message) => {
                warn!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::TitleRequired => ServiceError::TitleRequired,
            StoreError::NotFound(_) => ServiceError::NotFound,
            StoreError::Internal(error) => ServiceError::Internal(error.to_string()),
        }
    }
}
