//! Store repository for the monitoring context.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::store::{self, Entity as StoreEntity};
use crate::domain::{CreateStoreCommand, Store};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Store>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>>;

    async fn create(&self, command: CreateStoreCommand) -> AppResult<Store>;
}

/// SeaORM-backed store repository
pub struct StoreStore {
    db: DatabaseConnection,
}

impl StoreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for StoreStore {
    async fn find_all(&self) -> AppResult<Vec<Store>> {
        let models = StoreEntity::find()
            .order_by_asc(store::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Store::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>> {
        let result = StoreEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Store::from))
    }

    async fn create(&self, command: CreateStoreCommand) -> AppResult<Store> {
        let model = store::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(command.name),
            number_store: Set(command.number_store),
            amount_sensor: Set(command.amount_sensor),
            fill_percent: Set(command.fill_percent),
            color: Set(command.color),
            ubication: Set(command.ubication),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await?;

        Ok(Store::from(model))
    }
}
