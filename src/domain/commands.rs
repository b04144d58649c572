//! Commands: intent-to-mutate values, each consumed by a single handler.

use uuid::Uuid;

use super::role::RoleName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

/// Sign-up request; an empty role list means the default role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<RoleName>,
}

impl SignUpCommand {
    /// Requested roles, falling back to the default role when none were given.
    pub fn effective_roles(&self) -> Vec<RoleName> {
        if self.roles.is_empty() {
            return vec![RoleName::default()];
        }
        let mut roles = self.roles.clone();
        roles.sort();
        roles.dedup();
        roles
    }
}

/// Insert every known role that is missing from storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedRolesCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProfileCommand {
    pub username: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStoreCommand {
    pub name: String,
    pub number_store: i32,
    pub amount_sensor: i32,
    pub fill_percent: i32,
    pub color: String,
    pub ubication: String,
}
