//! Profile services.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    CreateProfileCommand, GetAllProfilesQuery, GetProfileByIdQuery, GetProfileByUserIdQuery,
    Profile,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ProfileCommandService: Send + Sync {
    async fn create_profile(&self, command: CreateProfileCommand) -> AppResult<Profile>;
}

#[async_trait]
pub trait ProfileQueryService: Send + Sync {
    async fn get_all_profiles(&self, query: GetAllProfilesQuery) -> AppResult<Vec<Profile>>;

    async fn get_profile_by_id(&self, query: GetProfileByIdQuery) -> AppResult<Option<Profile>>;

    async fn get_profile_by_user_id(
        &self,
        query: GetProfileByUserIdQuery,
    ) -> AppResult<Option<Profile>>;
}

pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileCommandService for ProfileManager<U> {
    async fn create_profile(&self, command: CreateProfileCommand) -> AppResult<Profile> {
        let profiles = self.uow.profiles();
        if profiles.find_by_user_id(command.user_id).await?.is_some() {
            return Err(AppError::conflict("Profile"));
        }

        let profile = profiles.create(command.user_id, command.username).await?;
        tracing::info!(profile_id = %profile.id, user_id = %profile.user_id, "Profile created");
        Ok(profile)
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileQueryService for ProfileManager<U> {
    async fn get_all_profiles(&self, _query: GetAllProfilesQuery) -> AppResult<Vec<Profile>> {
        self.uow.profiles().find_all().await
    }

    async fn get_profile_by_id(&self, query: GetProfileByIdQuery) -> AppResult<Option<Profile>> {
        self.uow.profiles().find_by_id(query.profile_id).await
    }

    async fn get_profile_by_user_id(
        &self,
        query: GetProfileByUserIdQuery,
    ) -> AppResult<Option<Profile>> {
        self.uow.profiles().find_by_user_id(query.user_id).await
    }
}
