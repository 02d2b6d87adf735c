use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::Record;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// PATCH /data/:route/:id handler - Update whitelisted fields of a record
///
/// The body must be a JSON object. Every key must be listed in the
/// route's `properties`, otherwise the record is left untouched.
#[utoipa::path(
    patch,
    path = routes::DATA_ITEM,
    params(
        ("route" = String, Path, description = "Name of the route"),
        ("id" = String, Path, description = "Record id; numeric ids match their decimal text")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Updated record", body = serde_json::Value),
        (status = 400, description = "Invalid fields or invalid JSON payload", body = ErrorResponse),
        (status = 404, description = "Route or ID not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn patch_handler(
    State(state): State<AppState>,
    Path((route, id)): Path<(String, String)>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(updates) = payload?;

    let record = state
        .store
        .lock()
        .await
        .patch_by_id(&route, &id, updates)
        .inspect_err(|e| {
            tracing::info!("Patch of record {} in route '{}' rejected: {}", id, route, e);
        })?;

    tracing::info!("Updated record {} in route '{}'", id, route);
    Ok((StatusCode::OK, Json(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, test_state};
    use crate::state::AppState;
    use axum::{body::Body, http::Request, routing::patch, Router};
    use serde_json::json;
    use tower::ServiceExt;

    fn setup_test_app(state: AppState) -> Router {
        Router::new()
            .route(crate::routes::DATA_ITEM, patch(patch_handler))
            .with_state(state)
    }

    fn patch_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_patch_pet() {
        let app = setup_test_app(test_state());
        let updates = json!({ "name": "Duvel gewijzigd" });

        let response = app
            .oneshot(patch_request("/data/pet/2", updates.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "id": 2, "name": "Duvel gewijzigd" })
        );
    }

    #[tokio::test]
    async fn test_patch_person_multiple_fields() {
        let app = setup_test_app(test_state());
        let updates = json!({ "name": "Sofie gewijzigd", "age": 9 });

        let response = app
            .oneshot(patch_request("/data/person/2", updates.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], json!("Sofie gewijzigd"));
        assert_eq!(body["age"], json!(9));
    }

    #[tokio::test]
    async fn test_patch_invalid_fields_leaves_record_unchanged() {
        let state = test_state();
        let app = setup_test_app(state.clone());
        let updates = json!({ "name": "x", "color": "red", "owner": "tim" });

        let response = app
            .oneshot(patch_request("/data/pet/2", updates.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.message, "Invalid fields: color, owner");

        let store = state.store.lock().await;
        let pet = serde_json::to_value(&store.get_all("pet").unwrap()[1]).unwrap();
        assert_eq!(pet, json!({ "id": 2, "name": "duvel" }));
    }

    #[tokio::test]
    async fn test_patch_unknown_id() {
        let app = setup_test_app(test_state());

        let response = app
            .oneshot(patch_request("/data/pet/42", json!({ "name": "x" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], json!("ID not found"));
    }

    #[tokio::test]
    async fn test_patch_unknown_route_checked_before_fields() {
        let app = setup_test_app(test_state());

        let response = app
            .oneshot(patch_request("/data/car/1", json!({ "color": "red" }).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], json!("Route not found"));
    }

    #[tokio::test]
    async fn test_patch_invalid_json() {
        let app = setup_test_app(test_state());

        let response = app
            .oneshot(patch_request("/data/pet/2", "{invalid json}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            json!("Invalid JSON payload passed.")
        );
    }

    #[tokio::test]
    async fn test_patch_non_object_body() {
        let app = setup_test_app(test_state());

        let response = app
            .oneshot(patch_request("/data/pet/2", "[1, 2]"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
