//! Role services - catalogue queries and startup seeding.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{GetAllRolesQuery, GetRoleByNameQuery, Role, RoleName, SeedRolesCommand};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait RoleQueryService: Send + Sync {
    async fn get_all_roles(&self, query: GetAllRolesQuery) -> AppResult<Vec<Role>>;

    async fn get_role_by_name(&self, query: GetRoleByNameQuery) -> AppResult<Option<Role>>;
}

#[async_trait]
pub trait RoleCommandService: Send + Sync {
    /// Insert missing roles; returns only the roles created by this call
    async fn seed_roles(&self, command: SeedRolesCommand) -> AppResult<Vec<Role>>;
}

pub struct RoleCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoleCatalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RoleQueryService for RoleCatalog<U> {
    async fn get_all_roles(&self, _query: GetAllRolesQuery) -> AppResult<Vec<Role>> {
        self.uow.roles().find_all().await
    }

    async fn get_role_by_name(&self, query: GetRoleByNameQuery) -> AppResult<Option<Role>> {
        self.uow.roles().find_by_name(query.name).await
    }
}

#[async_trait]
impl<U: UnitOfWork> RoleCommandService for RoleCatalog<U> {
    async fn seed_roles(&self, _command: SeedRolesCommand) -> AppResult<Vec<Role>> {
        let roles = self.uow.roles();
        let mut created = Vec::new();

        for name in RoleName::ALL {
            if roles.exists_by_name(name).await? {
                continue;
            }
            let role = roles.create(name).await?;
            tracing::info!(role = %role.name, "Seeded role");
            created.push(role);
        }

        Ok(created)
    }
}
