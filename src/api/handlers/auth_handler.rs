//! Authentication handlers: sign-in and sign-up.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::domain::{
    AuthenticatedUserResponse, CreateProfileCommand, RoleName, SignInCommand, SignUpCommand,
    UserResponse,
};
use crate::errors::{AppError, AppResult};
use crate::services::Services;

/// Sign-in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignInResource {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw1")]
    pub password: String,
}

/// Sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignUpResource {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    #[schema(example = "ana")]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw1")]
    pub password: String,
    /// Role names; empty means `ROLE_USER`
    #[serde(default)]
    #[schema(example = json!(["ROLE_USER"]))]
    pub roles: Vec<String>,
}

impl From<SignInResource> for SignInCommand {
    fn from(resource: SignInResource) -> Self {
        Self {
            email: resource.email,
            password: resource.password,
        }
    }
}

impl TryFrom<SignUpResource> for SignUpCommand {
    type Error = AppError;

    fn try_from(resource: SignUpResource) -> Result<Self, Self::Error> {
        let roles = resource
            .roles
            .iter()
            .map(|name| name.parse::<RoleName>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            username: resource.username,
            email: resource.email,
            password: resource.password,
            roles,
        })
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<Services> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-in",
    tag = "Authentication",
    request_body = SignInResource,
    responses(
        (status = 200, description = "Signed in", body = AuthenticatedUserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown email or wrong password")
    )
)]
pub async fn sign_in(
    State(services): State<Services>,
    ValidatedJson(payload): ValidatedJson<SignInResource>,
) -> AppResult<Json<AuthenticatedUserResponse>> {
    let (user, token) = services.user_commands().sign_in(payload.into()).await?;

    Ok(Json(AuthenticatedUserResponse::new(user, token)))
}

/// Register a new user and its profile
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-up",
    tag = "Authentication",
    request_body = SignUpResource,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Username or email taken, unknown role, or validation error")
    )
)]
pub async fn sign_up(
    State(services): State<Services>,
    ValidatedJson(payload): ValidatedJson<SignUpResource>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let command = SignUpCommand::try_from(payload)?;
    let user = services.user_commands().sign_up(command).await?;

    services
        .profile_commands()
        .create_profile(CreateProfileCommand {
            username: user.username.clone(),
            user_id: user.id,
        })
        .await
        .inspect_err(|e| {
            // The user row is already committed and has no profile
            tracing::error!(
                user_id = %user.id,
                error = %e,
                "Profile creation failed after sign-up"
            );
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up_resource(roles: &[&str]) -> SignUpResource {
        SignUpResource {
            username: "ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw1".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_sign_up_resource_parses_roles() {
        let command = SignUpCommand::try_from(sign_up_resource(&["ROLE_ADMIN"])).unwrap();
        assert_eq!(command.roles, vec![RoleName::Admin]);
        assert_eq!(command.username, "ana");
    }

    #[test]
    fn test_sign_up_resource_unknown_role() {
        let result = SignUpCommand::try_from(sign_up_resource(&["ROLE_GUEST"]));
        assert!(matches!(result, Err(AppError::RoleNotFound(name)) if name == "ROLE_GUEST"));
    }

    #[test]
    fn test_sign_up_resource_validation() {
        let mut resource = sign_up_resource(&[]);
        assert!(resource.validate().is_ok());

        resource.email = "not-an-email".to_string();
        assert!(resource.validate().is_err());
    }
}
