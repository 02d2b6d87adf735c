// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const DATA_SEARCH: &str = "/data/search";
pub const DATA_ROUTE: &str = "/data/{route}";
pub const DATA_ITEM: &str = "/data/{route}/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
