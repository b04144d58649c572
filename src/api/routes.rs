//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, profile_routes, role_routes, store_routes, user_routes};
use super::middleware::{auth_middleware, rate_limit_auth_middleware, rate_limit_middleware};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::API_PREFIX;
use crate::services::Services;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let services = state.services.clone();

    Router::new()
        // Health check endpoints (no rate limiting)
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.clone())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes (stricter rate limiting)
        .merge(auth_router(services.clone()).route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_auth_middleware,
        )))
        // Protected routes (JWT + general rate limiting)
        .merge(resource_router(services).route_layer(middleware::from_fn_with_state(
            state,
            rate_limit_middleware,
        )))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Every `/api/v1` route without rate limiting or Redis.
pub fn api_router(services: Services) -> Router {
    auth_router(services.clone()).merge(resource_router(services))
}

fn auth_router(services: Services) -> Router {
    Router::new()
        .nest(&format!("{API_PREFIX}/authentication"), auth_routes())
        .with_state(services)
}

fn resource_router(services: Services) -> Router {
    Router::new()
        .nest(&format!("{API_PREFIX}/users"), user_routes())
        .nest(&format!("{API_PREFIX}/roles"), role_routes())
        .nest(&format!("{API_PREFIX}/profiles"), profile_routes())
        .nest(&format!("{API_PREFIX}/stores"), store_routes())
        .route_layer(middleware::from_fn_with_state(
            services.clone(),
            auth_middleware,
        ))
        .with_state(services)
}

async fn root() -> &'static str {
    "CleanView backend"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    redis: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_probe<E: ToString>(probe: Result<(), E>) -> Self {
        match probe {
            Ok(()) => Self {
                status: "healthy",
                error: None,
            },
            Err(e) => Self {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        }
    }

    fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Health check endpoint with database and Redis connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (db_probe, redis_probe) = tokio::join!(state.database.ping(), state.cache.ping());
    let database = ServiceStatus::from_probe(db_probe);
    let redis = ServiceStatus::from_probe(redis_probe);

    let all_healthy = database.is_healthy() && redis.is_healthy();
    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth { database, redis },
    };

    (status_code, Json(response))
}
