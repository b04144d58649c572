//! HTTP request handlers.

pub mod auth_handler;
pub mod profile_handler;
pub mod role_handler;
pub mod store_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use profile_handler::profile_routes;
pub use role_handler::role_routes;
pub use store_handler::store_routes;
pub use user_handler::user_routes;
