//! Application state shared by every request.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Cache, Database};
use crate::services::Services;

/// Application state: services plus the infrastructure handles the
/// health probe and rate limiter talk to directly.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Redis cache
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
    /// Rate-limit on forwarding headers set by a trusted proxy
    pub trust_proxy_headers: bool,
}

impl AppState {
    /// Wire services over the database connection.
    pub fn from_config(database: Arc<Database>, cache: Arc<Cache>, config: &Config) -> Self {
        let services = Services::from_connection(database.connection().clone(), config);

        Self {
            services,
            cache,
            database,
            trust_proxy_headers: config.trust_proxy_headers,
        }
    }
}

impl FromRef<AppState> for Services {
    fn from_ref(state: &AppState) -> Self {
        state.services.clone()
    }
}
