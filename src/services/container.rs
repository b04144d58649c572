//! Service container - wires every application service to one Unit of Work.

use std::sync::Arc;

use super::{
    Authenticator, JwtTokenService, ProfileCommandService, ProfileManager, ProfileQueryService,
    RoleCatalog, RoleCommandService, RoleQueryService, StoreCommandService, StoreManager,
    StoreQueryService, TokenService, UserCommandService, UserDirectory, UserQueryService,
};
use crate::config::Config;
use crate::infra::{Persistence, UnitOfWork};

/// Centralized, cheaply cloneable access to all application services.
#[derive(Clone)]
pub struct Services {
    tokens: Arc<dyn TokenService>,
    user_commands: Arc<dyn UserCommandService>,
    user_queries: Arc<dyn UserQueryService>,
    role_commands: Arc<dyn RoleCommandService>,
    role_queries: Arc<dyn RoleQueryService>,
    profile_commands: Arc<dyn ProfileCommandService>,
    profile_queries: Arc<dyn ProfileQueryService>,
    store_commands: Arc<dyn StoreCommandService>,
    store_queries: Arc<dyn StoreQueryService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        Self::from_unit_of_work(Arc::new(Persistence::new(db)), config)
    }

    /// Create service container over any Unit of Work implementation
    pub fn from_unit_of_work<U: UnitOfWork + 'static>(uow: Arc<U>, config: &Config) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config));
        let roles = Arc::new(RoleCatalog::new(uow.clone()));
        let profiles = Arc::new(ProfileManager::new(uow.clone()));
        let stores = Arc::new(StoreManager::new(uow.clone()));

        Self {
            user_commands: Arc::new(Authenticator::new(uow.clone(), tokens.clone())),
            user_queries: Arc::new(UserDirectory::new(uow)),
            tokens,
            role_commands: roles.clone(),
            role_queries: roles,
            profile_commands: profiles.clone(),
            profile_queries: profiles,
            store_commands: stores.clone(),
            store_queries: stores,
        }
    }

    pub fn tokens(&self) -> Arc<dyn TokenService> {
        self.tokens.clone()
    }

    pub fn user_commands(&self) -> Arc<dyn UserCommandService> {
        self.user_commands.clone()
    }

    pub fn user_queries(&self) -> Arc<dyn UserQueryService> {
        self.user_queries.clone()
    }

    pub fn role_commands(&self) -> Arc<dyn RoleCommandService> {
        self.role_commands.clone()
    }

    pub fn role_queries(&self) -> Arc<dyn RoleQueryService> {
        self.role_queries.clone()
    }

    pub fn profile_commands(&self) -> Arc<dyn ProfileCommandService> {
        self.profile_commands.clone()
    }

    pub fn profile_queries(&self) -> Arc<dyn ProfileQueryService> {
        self.profile_queries.clone()
    }

    pub fn store_commands(&self) -> Arc<dyn StoreCommandService> {
        self.store_commands.clone()
    }

    pub fn store_queries(&self) -> Arc<dyn StoreQueryService> {
        self.store_queries.clone()
    }
}
