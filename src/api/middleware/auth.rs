//! Bearer authentication middleware and the request principal.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use uuid::Uuid;

use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{GetUserByUsernameQuery, User};
use crate::errors::AppError;
use crate::services::Services;

/// Authenticated principal built from a stored user.
///
/// Account state is not modelled, so the four account flags are always set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    pub id: Uuid,
    pub username: String,
    /// Stored password hash
    #[serde(skip_serializing)]
    pub password: String,
    pub authorities: Vec<String>,
    pub account_non_expired: bool,
    pub account_non_locked: bool,
    pub credentials_non_expired: bool,
    pub enabled: bool,
}

impl UserDetails {
    pub fn build(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            password: user.password_hash.clone(),
            authorities: user
                .roles
                .iter()
                .map(|role| role.authority().to_string())
                .collect(),
            account_non_expired: true,
            account_non_locked: true,
            credentials_non_expired: true,
            enabled: true,
        }
    }
}

/// Bearer authentication middleware.
///
/// Resolves the token to a username, loads that user and injects
/// `UserDetails` into the request extensions.
pub async fn auth_middleware(
    State(services): State<Services>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(AppError::Unauthorized)?;

    let username = services.tokens().username_from_token(token)?;

    let user = services
        .user_queries()
        .get_user_by_username(GetUserByUsernameQuery { username })
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(UserDetails::build(&user));

    Ok(next.run(request).await)
}
