//! User aggregate and its client-facing representations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::role::{Role, RoleName};

/// User aggregate.
///
/// The role set is fixed when the user is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check whether the user holds the given role
    pub fn has_role(&self, name: RoleName) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }

    /// Role names as plain strings, in a stable order
    pub fn role_names(&self) -> Vec<String> {
        let mut names: Vec<RoleName> = self.roles.iter().map(|role| role.name).collect();
        names.sort();
        names.dedup();
        names.into_iter().map(|name| name.to_string()).collect()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = json!(["ROLE_USER"]))]
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let roles = user.role_names();
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            roles,
        }
    }
}

/// Successful sign-in payload: the user plus a bearer token
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

impl AuthenticatedUserResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: Vec<Role>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "ana".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            roles,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_omits_password_hash() {
        let user = user_with_roles(vec![Role::new(1, RoleName::User)]);
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["roles"], serde_json::json!(["ROLE_USER"]));
    }

    #[test]
    fn test_serialized_user_skips_hash() {
        let user = user_with_roles(vec![]);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("$argon2id$hash"));
    }

    #[test]
    fn test_role_names_sorted_and_unique() {
        let user = user_with_roles(vec![
            Role::new(2, RoleName::Admin),
            Role::new(1, RoleName::User),
            Role::new(2, RoleName::Admin),
        ]);
        assert_eq!(user.role_names(), vec!["ROLE_USER", "ROLE_ADMIN"]);
        assert!(user.has_role(RoleName::Admin));
    }
}
