//! User command service - sign-in and sign-up.

use async_trait::async_trait;
use std::sync::Arc;

use super::TokenService;
use crate::domain::{Password, Role, SignInCommand, SignUpCommand, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait UserCommandService: Send + Sync {
    /// Authenticate by email and password, returning the user and a fresh token
    async fn sign_in(&self, command: SignInCommand) -> AppResult<(User, String)>;

    /// Register a new user with the requested roles
    async fn sign_up(&self, command: SignUpCommand) -> AppResult<User>;
}

/// Concrete implementation of UserCommandService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    tokens: Arc<dyn TokenService>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, tokens: Arc<dyn TokenService>) -> Self {
        Self { uow, tokens }
    }

    async fn resolve_roles(&self, command: &SignUpCommand) -> AppResult<Vec<Role>> {
        let roles = self.uow.roles();
        let mut resolved = Vec::new();
        for name in command.effective_roles() {
            let role = roles
                .find_by_name(name)
                .await?
                .ok_or_else(|| AppError::RoleNotFound(name.to_string()))?;
            resolved.push(role);
        }
        Ok(resolved)
    }
}

#[async_trait]
impl<U: UnitOfWork> UserCommandService for Authenticator<U> {
    async fn sign_in(&self, command: SignInCommand) -> AppResult<(User, String)> {
        let user = self
            .uow
            .users()
            .find_by_email(&command.email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&command.password) {
            tracing::info!(user_id = %user.id, "Sign-in rejected: password mismatch");
            return Err(AppError::InvalidPassword);
        }

        let token = self.tokens.generate_token(&user.username)?;
        tracing::info!(user_id = %user.id, "User signed in");
        Ok((user, token))
    }

    async fn sign_up(&self, command: SignUpCommand) -> AppResult<User> {
        let users = self.uow.users();

        let (username_taken, email_taken) = futures::try_join!(
            users.exists_by_username(&command.username),
            users.exists_by_email(&command.email),
        )?;
        if username_taken {
            return Err(AppError::UsernameTaken);
        }
        if email_taken {
            return Err(AppError::EmailTaken);
        }

        let roles = self.resolve_roles(&command).await?;
        let password_hash = Password::new(&command.password)?.into_string();

        let user = users
            .create(command.username, command.email, password_hash, roles)
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User signed up");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::RoleName;
    use crate::infra::{
        MockProfileRepository, MockRoleRepository, MockStoreRepository, MockUserRepository,
        ProfileRepository, RoleRepository, StoreRepository, UserRepository,
    };
    use crate::services::JwtTokenService;
    use crate::Config;

    struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        roles: Arc<MockRoleRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn roles(&self) -> Arc<dyn RoleRepository> {
            self.roles.clone()
        }

        fn profiles(&self) -> Arc<dyn ProfileRepository> {
            Arc::new(MockProfileRepository::new())
        }

        fn stores(&self) -> Arc<dyn StoreRepository> {
            Arc::new(MockStoreRepository::new())
        }
    }

    fn service(users: MockUserRepository, roles: MockRoleRepository) -> Authenticator<TestUnitOfWork> {
        let uow = TestUnitOfWork {
            users: Arc::new(users),
            roles: Arc::new(roles),
        };
        let tokens = JwtTokenService::new(&Config::with_secret(
            "test-secret-key-for-testing-only-32chars",
        ));
        Authenticator::new(Arc::new(uow), Arc::new(tokens))
    }

    fn stored_user(plain_password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: "ana".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: Password::new(plain_password).unwrap().into_string(),
            roles: vec![Role::new(1, RoleName::User)],
            created_at: Utc::now(),
        }
    }

    fn sign_up_command(roles: Vec<RoleName>) -> SignUpCommand {
        SignUpCommand {
            username: "ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw1".to_string(),
            roles,
        }
    }

    fn roles_catalog() -> MockRoleRepository {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_by_name().returning(|name| {
            let id = match name {
                RoleName::User => 1,
                RoleName::Admin => 2,
            };
            Ok(Some(Role::new(id, name)))
        });
        roles
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let user = stored_user("pw1");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "ana@x.com")
            .returning(move |_| Ok(Some(user.clone())));

        let (signed_in, token) = service(users, MockRoleRepository::new())
            .sign_in(SignInCommand {
                email: "ana@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(signed_in.id, user_id);
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let result = service(users, MockRoleRepository::new())
            .sign_in(SignInCommand {
                email: "nobody@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let user = stored_user("pw1");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(users, MockRoleRepository::new())
            .sign_in(SignInCommand {
                email: "ana@x.com".to_string(),
                password: "pw2".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidPassword)));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_taken_username() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_username().returning(|_| Ok(true));
        users.expect_exists_by_email().returning(|_| Ok(true));
        users.expect_create().never();

        let result = service(users, roles_catalog())
            .sign_up(sign_up_command(vec![]))
            .await;

        // Username is reported first even when both collide
        assert!(matches!(result, Err(AppError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_username().returning(|_| Ok(false));
        users.expect_exists_by_email().returning(|_| Ok(true));
        users.expect_create().never();

        let result = service(users, roles_catalog())
            .sign_up(sign_up_command(vec![RoleName::Admin]))
            .await;

        assert!(matches!(result, Err(AppError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_sign_up_stores_hash_and_default_role() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_username().returning(|_| Ok(false));
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .withf(|username, email, password_hash, roles| {
                username == "ana"
                    && email == "ana@x.com"
                    && password_hash != "pw1"
                    && Password::from_hash(password_hash.clone()).verify("pw1")
                    && roles.len() == 1
                    && roles[0].name == RoleName::User
            })
            .times(1)
            .returning(|username, email, password_hash, roles| {
                Ok(User {
                    id: Uuid::new_v4(),
                    username,
                    email,
                    password_hash,
                    roles,
                    created_at: Utc::now(),
                })
            });

        let user = service(users, roles_catalog())
            .sign_up(sign_up_command(vec![]))
            .await
            .unwrap();

        assert_eq!(user.username, "ana");
        assert!(user.has_role(RoleName::User));
    }

    #[tokio::test]
    async fn test_sign_up_unseeded_role() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_username().returning(|_| Ok(false));
        users.expect_exists_by_email().returning(|_| Ok(false));
        users.expect_create().never();

        let mut roles = MockRoleRepository::new();
        roles.expect_find_by_name().returning(|_| Ok(None));

        let result = service(users, roles)
            .sign_up(sign_up_command(vec![RoleName::Admin]))
            .await;

        assert!(matches!(result, Err(AppError::RoleNotFound(name)) if name == "ROLE_ADMIN"));
    }
}
