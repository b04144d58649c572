//! Queries: intent-to-read values. Handling one never mutates state.

use uuid::Uuid;

use super::role::RoleName;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllUsersQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetUserByIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetUserByUsernameQuery {
    pub username: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllRolesQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetRoleByNameQuery {
    pub name: RoleName,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllProfilesQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetProfileByIdQuery {
    pub profile_id: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct GetProfileByUserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllStoresQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetStoreByIdQuery {
    pub store_id: Uuid,
}
