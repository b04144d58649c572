//! User repository: lookups by id, username and email, plus creation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::{
    role::Entity as RoleEntity,
    user::{self, ActiveModel, Entity as UserEntity},
    user_role,
};
use crate::domain::{Role, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Postgres names for the inline unique constraints on `users`.
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, oldest first
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Persist a new user together with its role associations
    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        roles: Vec<Role>,
    ) -> AppResult<User>;
}

/// SeaORM-backed user repository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(&self, filter: sea_orm::sea_query::SimpleExpr) -> AppResult<Option<User>> {
        let found = UserEntity::find()
            .filter(filter)
            .find_with_related(RoleEntity)
            .all(&self.db)
            .await?;

        Ok(found
            .into_iter()
            .next()
            .map(|(model, roles)| model.into_domain(roles)))
    }

    async fn any_where(&self, filter: sea_orm::sea_query::SimpleExpr) -> AppResult<bool> {
        let count = UserEntity::find().filter(filter).count(&self.db).await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let found = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .find_with_related(RoleEntity)
            .all(&self.db)
            .await?;

        Ok(found
            .into_iter()
            .map(|(model, roles)| model.into_domain(roles))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.find_one(user::Column::Id.eq(id)).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Username.eq(username)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Email.eq(email)).await
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        self.any_where(user::Column::Username.eq(username)).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.any_where(user::Column::Email.eq(email)).await
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        roles: Vec<Role>,
    ) -> AppResult<User> {
        let txn = self.db.begin().await?;

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };
        let model = active_model
            .insert(&txn)
            .await
            .map_err(insert_error)?;

        for role in &roles {
            user_role::ActiveModel {
                user_id: Set(model.id),
                role_id: Set(role.id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        tracing::debug!(user_id = %model.id, roles = roles.len(), "User persisted");

        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            roles,
            created_at: model.created_at,
        })
    }
}

/// A sign-up that loses the race to the unique index reports the same
/// error as one caught by the existence checks.
fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => unique_violation(&detail),
        _ => AppError::Database(err),
    }
}

fn unique_violation(detail: &str) -> AppError {
    if detail.contains(USERNAME_CONSTRAINT) {
        AppError::UsernameTaken
    } else if detail.contains(EMAIL_CONSTRAINT) {
        AppError::EmailTaken
    } else {
        tracing::debug!(%detail, "Unique constraint violated");
        AppError::conflict("User")
    }
}
