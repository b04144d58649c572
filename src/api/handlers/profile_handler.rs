//! Profile query handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::domain::{GetAllProfilesQuery, GetProfileByIdQuery, ProfileResponse};
use crate::errors::{AppResult, OptionExt};
use crate::services::Services;

pub fn profile_routes() -> Router<Services> {
    Router::new()
        .route("/", get(list_profiles))
        .route("/:profile_id", get(get_profile))
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_profiles(
    State(services): State<Services>,
) -> AppResult<Json<Vec<ProfileResponse>>> {
    let profiles = services
        .profile_queries()
        .get_all_profiles(GetAllProfilesQuery)
        .await?;

    Ok(Json(profiles.into_iter().map(ProfileResponse::from).collect()))
}

/// Get profile by ID
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profile_id}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("profile_id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(services): State<Services>,
    Path(profile_id): Path<Uuid>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = services
        .profile_queries()
        .get_profile_by_id(GetProfileByIdQuery { profile_id })
        .await?
        .ok_or_not_found()?;

    Ok(Json(ProfileResponse::from(profile)))
}
