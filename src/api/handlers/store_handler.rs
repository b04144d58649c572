//! Store handlers for the monitoring context.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::UserDetails;
use crate::domain::{CreateStoreCommand, GetAllStoresQuery, GetStoreByIdQuery, StoreResponse};
use crate::errors::{AppResult, OptionExt};
use crate::services::Services;

/// Store creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreResource {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Tienda Miraflores")]
    pub name: String,
    #[schema(example = 12)]
    pub number_store: i32,
    #[validate(range(min = 0, message = "Amount of sensors cannot be negative"))]
    #[schema(example = 4)]
    pub amount_sensor: i32,
    #[validate(range(min = 0, max = 100, message = "Fill percent must be between 0 and 100"))]
    #[schema(example = 75)]
    pub fill_percent: i32,
    #[validate(length(min = 1, message = "Color is required"))]
    #[schema(example = "green")]
    pub color: String,
    #[validate(length(min = 1, message = "Ubication is required"))]
    #[schema(example = "Av. Larco 345, Lima")]
    pub ubication: String,
}

impl From<CreateStoreResource> for CreateStoreCommand {
    fn from(resource: CreateStoreResource) -> Self {
        Self {
            name: resource.name,
            number_store: resource.number_store,
            amount_sensor: resource.amount_sensor,
            fill_percent: resource.fill_percent,
            color: resource.color,
            ubication: resource.ubication,
        }
    }
}

pub fn store_routes() -> Router<Services> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/:store_id", get(get_store))
}

/// Create a store
#[utoipa::path(
    post,
    path = "/api/v1/stores",
    tag = "Stores",
    security(("bearer_auth" = [])),
    request_body = CreateStoreResource,
    responses(
        (status = 201, description = "Store created", body = StoreResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_store(
    State(services): State<Services>,
    Extension(principal): Extension<UserDetails>,
    ValidatedJson(payload): ValidatedJson<CreateStoreResource>,
) -> AppResult<(StatusCode, Json<StoreResponse>)> {
    let store = services
        .store_commands()
        .create_store(payload.into())
        .await?;

    tracing::info!(store_id = %store.id, created_by = %principal.username, "Store created");

    Ok((StatusCode::CREATED, Json(StoreResponse::from(store))))
}

/// List all stores
#[utoipa::path(
    get,
    path = "/api/v1/stores",
    tag = "Stores",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All stores", body = Vec<StoreResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_stores(State(services): State<Services>) -> AppResult<Json<Vec<StoreResponse>>> {
    let stores = services
        .store_queries()
        .get_all_stores(GetAllStoresQuery)
        .await?;

    Ok(Json(stores.into_iter().map(StoreResponse::from).collect()))
}

/// Get store by ID
#[utoipa::path(
    get,
    path = "/api/v1/stores/{store_id}",
    tag = "Stores",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store found", body = StoreResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn get_store(
    State(services): State<Services>,
    Path(store_id): Path<Uuid>,
) -> AppResult<Json<StoreResponse>> {
    let store = services
        .store_queries()
        .get_store_by_id(GetStoreByIdQuery { store_id })
        .await?
        .ok_or_not_found()?;

    Ok(Json(StoreResponse::from(store)))
}
