use crate::api_doc::ApiDoc;
use crate::handlers::{
    delete_handler, health_handler, list_handler, not_found_handler, patch_handler,
    search_handler,
};
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::DATA_SEARCH, get(search_handler))
        .route(routes::DATA_ROUTE, get(list_handler))
        .route(routes::DATA_ITEM, axum::routing::delete(delete_handler).patch(patch_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
