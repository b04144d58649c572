//! Store services for the monitoring context.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateStoreCommand, GetAllStoresQuery, GetStoreByIdQuery, Store};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait StoreCommandService: Send + Sync {
    async fn create_store(&self, command: CreateStoreCommand) -> AppResult<Store>;
}

#[async_trait]
pub trait StoreQueryService: Send + Sync {
    async fn get_all_stores(&self, query: GetAllStoresQuery) -> AppResult<Vec<Store>>;

    async fn get_store_by_id(&self, query: GetStoreByIdQuery) -> AppResult<Option<Store>>;
}

pub struct StoreManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StoreManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StoreCommandService for StoreManager<U> {
    async fn create_store(&self, command: CreateStoreCommand) -> AppResult<Store> {
        let store = self.uow.stores().create(command).await?;
        tracing::info!(store_id = %store.id, name = %store.name, "Store created");
        Ok(store)
    }
}

#[async_trait]
impl<U: UnitOfWork> StoreQueryService for StoreManager<U> {
    async fn get_all_stores(&self, _query: GetAllStoresQuery) -> AppResult<Vec<Store>> {
        self.uow.stores().find_all().await
    }

    async fn get_store_by_id(&self, query: GetStoreByIdQuery) -> AppResult<Option<Store>> {
        self.uow.stores().find_by_id(query.store_id).await
    }
}
