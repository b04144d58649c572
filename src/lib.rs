//! CleanView backend
//!
//! Identity and access management (sign-in, sign-up, roles), user
//! profiles, and store monitoring behind an Axum REST API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Aggregates, commands and queries
//! - **services**: Command and query services
//! - **infra**: Database, repositories and Redis
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Role, RoleName, User};
pub use errors::{AppError, AppResult};
pub use services::Services;
