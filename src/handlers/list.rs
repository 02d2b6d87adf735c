use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::Record;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /data/:route handler - Return every record of a route
#[utoipa::path(
    get,
    path = routes::DATA_ROUTE,
    params(
        ("route" = String, Path, description = "Name of the route")
    ),
    responses(
        (status = 200, description = "All records of the route", body = Vec<serde_json::Value>),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Path(route): Path<String>,
) -> Result<(StatusCode, Json<Vec<Record>>), ApiError> {
    let store = state.store.lock().await;
    let data = store.get_all(&route)?;

    tracing::info!("Listed {} records of route '{}'", data.len(), route);
    Ok((StatusCode::OK, Json(data.to_vec())))
}
