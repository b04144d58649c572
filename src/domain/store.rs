//! Store aggregate for the monitoring context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A monitored store and its sensor summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub number_store: i32,
    pub amount_sensor: i32,
    pub fill_percent: i32,
    pub color: String,
    pub ubication: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    #[schema(example = "Tienda Miraflores")]
    pub name: String,
    #[schema(example = 12)]
    pub number_store: i32,
    #[schema(example = 4)]
    pub amount_sensor: i32,
    #[schema(example = 75)]
    pub fill_percent: i32,
    #[schema(example = "green")]
    pub color: String,
    #[schema(example = "Av. Larco 345, Lima")]
    pub ubication: String,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            number_store: store.number_store,
            amount_sensor: store.amount_sensor,
            fill_percent: store.fill_percent,
            color: store.color,
            ubication: store.ubication,
        }
    }
}
