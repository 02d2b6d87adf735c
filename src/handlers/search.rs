use crate::error::{ApiError, ErrorResponse};
use crate::models::SearchQuery;
use crate::routes;
use crate::state::AppState;
use crate::store::Record;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

/// GET /data/search handler - Full-text search across all routes
///
/// Matches records having at least one string value that contains `q`,
/// ignoring case. Results from every route are concatenated in order.
#[utoipa::path(
    get,
    path = routes::DATA_SEARCH,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching records", body = Vec<serde_json::Value>),
        (status = 400, description = "Search query is required", body = ErrorResponse),
        (status = 404, description = "No results found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Vec<Record>>), ApiError> {
    let Query(query) = query?;
    let q = query.q.unwrap_or_default();
    let results = state.store.lock().await.search(&q)?;

    tracing::info!("Search for '{}' matched {} records", q, results.len());
    Ok((StatusCode::OK, Json(results)))
}
