//! User query service - read-only lookups.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{GetAllUsersQuery, GetUserByIdQuery, GetUserByUsernameQuery, User};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn get_all_users(&self, query: GetAllUsersQuery) -> AppResult<Vec<User>>;

    async fn get_user_by_id(&self, query: GetUserByIdQuery) -> AppResult<Option<User>>;

    async fn get_user_by_username(&self, query: GetUserByUsernameQuery)
        -> AppResult<Option<User>>;
}

/// Pass-through implementation over the user repository
pub struct UserDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserDirectory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserQueryService for UserDirectory<U> {
    async fn get_all_users(&self, _query: GetAllUsersQuery) -> AppResult<Vec<User>> {
        self.uow.users().find_all().await
    }

    async fn get_user_by_id(&self, query: GetUserByIdQuery) -> AppResult<Option<User>> {
        self.uow.users().find_by_id(query.user_id).await
    }

    async fn get_user_by_username(
        &self,
        query: GetUserByUsernameQuery,
    ) -> AppResult<Option<User>> {
        self.uow.users().find_by_username(&query.username).await
    }
}
