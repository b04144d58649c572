//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, profile_handler, role_handler, store_handler, user_handler,
};
use crate::domain::{
    AuthenticatedUserResponse, ProfileResponse, RoleName, RoleResponse, StoreResponse,
    UserResponse,
};

/// OpenAPI documentation for the CleanView backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CleanView Backend",
        version = "0.1.0",
        description = "Identity, profiles and store monitoring for CleanView",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        auth_handler::sign_in,
        auth_handler::sign_up,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::get_user_by_username,
        role_handler::list_roles,
        profile_handler::list_profiles,
        profile_handler::get_profile,
        store_handler::create_store,
        store_handler::list_stores,
        store_handler::get_store,
    ),
    components(
        schemas(
            RoleName,
            RoleResponse,
            UserResponse,
            AuthenticatedUserResponse,
            ProfileResponse,
            StoreResponse,
            auth_handler::SignInResource,
            auth_handler::SignUpResource,
            store_handler::CreateStoreResource,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign-in and sign-up"),
        (name = "Users", description = "User queries"),
        (name = "Roles", description = "Role catalogue"),
        (name = "Profiles", description = "User profiles"),
        (name = "Stores", description = "Store monitoring")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/v1/authentication/sign-in"))
                        .build(),
                ),
            );
        }
    }
}
