//! Application services layer - Use cases and business logic.
//!
//! Each bounded context exposes a command service (mutations) and a
//! query service (reads). Services depend on the Unit of Work trait,
//! never on concrete repositories.

pub mod container;
mod profile_service;
mod role_service;
mod store_service;
mod token_service;
mod user_command_service;
mod user_query_service;

pub use container::Services;

pub use profile_service::{ProfileCommandService, ProfileManager, ProfileQueryService};
pub use role_service::{RoleCatalog, RoleCommandService, RoleQueryService};
pub use store_service::{StoreCommandService, StoreManager, StoreQueryService};
pub use token_service::{Claims, JwtTokenService, TokenService};
pub use user_command_service::{Authenticator, UserCommandService};
pub use user_query_service::{UserDirectory, UserQueryService};
