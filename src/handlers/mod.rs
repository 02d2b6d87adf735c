pub mod delete;
pub mod fallback;
pub mod health;
pub mod list;
pub mod patch;
pub mod search;

pub use delete::delete_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use patch::patch_handler;
pub use search::search_handler;
