//! Profile repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::profile::{self, Entity as ProfileEntity};
use crate::domain::Profile;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Profile>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>>;

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Create the profile for a user; one profile per user
    async fn create(&self, user_id: Uuid, username: String) -> AppResult<Profile>;
}

/// SeaORM-backed profile repository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        let models = ProfileEntity::find()
            .order_by_asc(profile::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Profile::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Profile::from))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(result.map(Profile::from))
    }

    async fn create(&self, user_id: Uuid, username: String) -> AppResult<Profile> {
        let model = profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            username: Set(username),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_write(e, "Profile"))?;

        Ok(Profile::from(model))
    }
}
