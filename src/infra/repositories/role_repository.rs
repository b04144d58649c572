//! Role repository: the role catalogue is read by name and seeded at startup.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::role::{self, Entity as RoleEntity};
use crate::domain::{Role, RoleName};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Role>>;

    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>>;

    async fn exists_by_name(&self, name: RoleName) -> AppResult<bool>;

    async fn create(&self, name: RoleName) -> AppResult<Role>;
}

/// SeaORM-backed role repository
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_all(&self) -> AppResult<Vec<Role>> {
        RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Role::try_from)
            .collect()
    }

    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        RoleEntity::find()
            .filter(role::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await?
            .map(Role::try_from)
            .transpose()
    }

    async fn exists_by_name(&self, name: RoleName) -> AppResult<bool> {
        let count = RoleEntity::find()
            .filter(role::Column::Name.eq(name.as_str()))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, name: RoleName) -> AppResult<Role> {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_write(e, "Role"))?;

        Role::try_from(model)
    }
}
