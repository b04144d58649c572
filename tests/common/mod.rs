//! In-memory persistence shared by the integration tests.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use cleanview_backend::domain::{
    CreateStoreCommand, Profile, Role, RoleName, SeedRolesCommand, Store, User,
};
use cleanview_backend::errors::{AppError, AppResult};
use cleanview_backend::infra::{
    ProfileRepository, RoleRepository, StoreRepository, UnitOfWork, UserRepository,
};
use cleanview_backend::{Config, Services};

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        roles: Vec<Role>,
    ) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.username == username || u.email == email) {
            return Err(AppError::conflict("User"));
        }

        let user = User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            roles,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryRoles {
    rows: Mutex<Vec<Role>>,
}

#[async_trait]
impl RoleRepository for MemoryRoles {
    async fn find_all(&self) -> AppResult<Vec<Role>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: RoleName) -> AppResult<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    async fn create(&self, name: RoleName) -> AppResult<Role> {
        let mut rows = self.rows.lock().unwrap();
        let role = Role::new(rows.len() as i64 + 1, name);
        rows.push(role.clone());
        Ok(role)
    }
}

#[derive(Default)]
pub struct MemoryProfiles {
    rows: Mutex<Vec<Profile>>,
    /// Make every `create` fail, as a lost database connection would
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl ProfileRepository for MemoryProfiles {
    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user_id: Uuid, username: String) -> AppResult<Profile> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::internal("profile store unavailable"));
        }
        let profile = Profile {
            id: Uuid::new_v4(),
            user_id,
            username,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(profile.clone());
        Ok(profile)
    }
}

#[derive(Default)]
pub struct MemoryStores {
    rows: Mutex<Vec<Store>>,
}

#[async_trait]
impl StoreRepository for MemoryStores {
    async fn find_all(&self) -> AppResult<Vec<Store>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, command: CreateStoreCommand) -> AppResult<Store> {
        let store = Store {
            id: Uuid::new_v4(),
            name: command.name,
            number_store: command.number_store,
            amount_sensor: command.amount_sensor,
            fill_percent: command.fill_percent,
            color: command.color,
            ubication: command.ubication,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(store.clone());
        Ok(store)
    }
}

/// Unit of Work over the in-memory repositories
#[derive(Default)]
pub struct MemoryUnitOfWork {
    pub users: Arc<MemoryUsers>,
    pub roles: Arc<MemoryRoles>,
    pub profiles: Arc<MemoryProfiles>,
    pub stores: Arc<MemoryStores>,
}

impl UnitOfWork for MemoryUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn roles(&self) -> Arc<dyn RoleRepository> {
        self.roles.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profiles.clone()
    }

    fn stores(&self) -> Arc<dyn StoreRepository> {
        self.stores.clone()
    }
}

pub fn test_config() -> Config {
    Config::with_secret(TEST_SECRET)
}

/// Services over fresh in-memory storage, roles already seeded.
pub async fn seeded_services() -> (Services, Arc<MemoryUnitOfWork>) {
    let uow = Arc::new(MemoryUnitOfWork::default());
    let services = Services::from_unit_of_work(uow.clone(), &test_config());
    services
        .role_commands()
        .seed_roles(SeedRolesCommand)
        .await
        .unwrap();
    (services, uow)
}
