//! Domain layer - Core business entities and logic
//!
//! Aggregates (users, profiles, stores), the role catalogue,
//! and the command/query values the services consume.

pub mod commands;
pub mod password;
pub mod profile;
pub mod queries;
pub mod role;
pub mod store;
pub mod user;

pub use commands::{
    CreateProfileCommand, CreateStoreCommand, SeedRolesCommand, SignInCommand, SignUpCommand,
};
pub use password::Password;
pub use profile::{Profile, ProfileResponse};
pub use queries::{
    GetAllProfilesQuery, GetAllRolesQuery, GetAllStoresQuery, GetAllUsersQuery,
    GetProfileByIdQuery, GetProfileByUserIdQuery, GetRoleByNameQuery, GetStoreByIdQuery,
    GetUserByIdQuery, GetUserByUsernameQuery,
};
pub use role::{Role, RoleName, RoleResponse};
pub use store::{Store, StoreResponse};
pub use user::{AuthenticatedUserResponse, User, UserResponse};
