//! User query handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::domain::{GetAllUsersQuery, GetUserByIdQuery, GetUserByUsernameQuery, UserResponse};
use crate::errors::{AppResult, OptionExt};
use crate::services::Services;

/// Create user routes
pub fn user_routes() -> Router<Services> {
    Router::new()
        .route("/", get(list_users))
        .route("/:user_id", get(get_user))
        .route("/username/:username", get(get_user_by_username))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_users(State(services): State<Services>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = services
        .user_queries()
        .get_all_users(GetAllUsersQuery)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(services): State<Services>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = services
        .user_queries()
        .get_user_by_id(GetUserByIdQuery { user_id })
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserResponse::from(user)))
}

/// Get user by username
#[utoipa::path(
    get,
    path = "/api/v1/users/username/{username}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_username(
    State(services): State<Services>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = services
        .user_queries()
        .get_user_by_username(GetUserByUsernameQuery { username })
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserResponse::from(user)))
}
