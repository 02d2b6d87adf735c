use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for any path that no route matches
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri);
    ApiError::NotFound("Not Found".to_string())
}
