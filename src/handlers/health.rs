use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Reports how many routes are currently held in memory and which file
/// they are saved to.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let routes = state.store.lock().await.routes().len();
    tracing::debug!("Health check passed ({} routes)", routes);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            routes,
            data_file: state.config.data_file.display().to_string(),
        }),
    )
}
