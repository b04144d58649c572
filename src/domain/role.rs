//! Role entity and the closed set of role names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::errors::AppError;

/// Enumerated role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum RoleName {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl RoleName {
    /// Every role the system knows about, in seeding order.
    pub const ALL: [RoleName; 2] = [RoleName::User, RoleName::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::User => ROLE_USER,
            RoleName::Admin => ROLE_ADMIN,
        }
    }
}

impl Default for RoleName {
    fn default() -> Self {
        RoleName::User
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(RoleName::User),
            ROLE_ADMIN => Ok(RoleName::Admin),
            other => Err(AppError::RoleNotFound(other.to_string())),
        }
    }
}

/// Role entity as stored in the roles table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: RoleName,
}

impl Role {
    pub fn new(id: i64, name: RoleName) -> Self {
        Self { id, name }
    }

    /// Authority string granted to holders of this role.
    pub fn authority(&self) -> &'static str {
        self.name.as_str()
    }
}

/// Role response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "ROLE_USER")]
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name.to_string(),
        }
    }
}
