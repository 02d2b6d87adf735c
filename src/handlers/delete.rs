use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /data/:route/:id handler - Remove one record
#[utoipa::path(
    delete,
    path = routes::DATA_ITEM,
    params(
        ("route" = String, Path, description = "Name of the route"),
        ("id" = String, Path, description = "Record id; numeric ids match their decimal text")
    ),
    responses(
        (status = 200, description = "Object deleted", body = DeleteResponse),
        (status = 404, description = "Route or ID not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((route, id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    state.store.lock().await.delete_by_id(&route, &id)?;

    tracing::info!("Deleted record {} from route '{}'", id, route);
    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Object deleted".to_string(),
        }),
    ))
}
