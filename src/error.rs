use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type, also used for plain success messages
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Custom error type for API endpoints
///
/// Maps store failures to HTTP status codes and renders them as
/// `{"message": ...}` JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Request is well-formed but not acceptable (missing query, bad fields)
    Validation(String),
    /// Route, record, search result or path does not exist
    NotFound(String),
    /// Request body could not be read as a JSON object
    InvalidJson(String),
    /// Store I/O or parse failure. Request handlers never touch the data
    /// file, so only a future load/save endpoint would produce it.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidJson(detail) => {
                tracing::debug!("Rejected JSON payload: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON payload passed.".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal error: {}", err),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyQuery | StoreError::InvalidFields(_) => {
                ApiError::Validation(err.to_string())
            }
            StoreError::RouteNotFound { ref route } => {
                tracing::info!(route = %route, "Route not found");
                ApiError::NotFound(err.to_string())
            }
            StoreError::IdNotFound { ref route, ref id } => {
                tracing::info!(route = %route, id = %id, "ID not found");
                ApiError::NotFound(err.to_string())
            }
            StoreError::NoResults { ref query } => {
                tracing::info!(query = %query, "No search results");
                ApiError::NotFound(err.to_string())
            }
            StoreError::Io(_) | StoreError::Parse(_) => ApiError::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!("Invalid query parameter: {}", rejection.body_text()))
    }
}
