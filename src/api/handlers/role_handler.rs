//! Role catalogue handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::domain::{GetAllRolesQuery, RoleResponse};
use crate::errors::AppResult;
use crate::services::Services;

pub fn role_routes() -> Router<Services> {
    Router::new().route("/", get(list_roles))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All roles", body = Vec<RoleResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_roles(State(services): State<Services>) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = services
        .role_queries()
        .get_all_roles(GetAllRolesQuery)
        .await?;

    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}
