use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{DeleteResponse, HealthResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "route-data-server API",
        version = "1.0.0",
        description = "A mock REST data server over JSON routes loaded from a file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::search::search_handler,
        handlers::list::list_handler,
        handlers::delete::delete_handler,
        handlers::patch::patch_handler
    ),
    components(
        schemas(
            DeleteResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "data", description = "Route data operations")
    )
)]
pub struct ApiDoc;
