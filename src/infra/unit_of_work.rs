//! Unit of Work - centralized repository access.
//!
//! Services depend on this trait instead of individual repositories,
//! so a single value wires the whole persistence layer (or its test double).
//! Writes that span several tables open their own transaction inside
//! the owning repository.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    ProfileRepository, ProfileStore, RoleRepository, RoleStore, StoreRepository, StoreStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn roles(&self) -> Arc<dyn RoleRepository>;

    fn profiles(&self) -> Arc<dyn ProfileRepository>;

    fn stores(&self) -> Arc<dyn StoreRepository>;
}

/// Concrete implementation of UnitOfWork over a SeaORM connection
pub struct Persistence {
    user_repo: Arc<UserStore>,
    role_repo: Arc<RoleStore>,
    profile_repo: Arc<ProfileStore>,
    store_repo: Arc<StoreStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            role_repo: Arc::new(RoleStore::new(db.clone())),
            profile_repo: Arc::new(ProfileStore::new(db.clone())),
            store_repo: Arc::new(StoreStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.role_repo.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }

    fn stores(&self) -> Arc<dyn StoreRepository> {
        self.store_repo.clone()
    }
}
