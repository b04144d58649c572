//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod profile;
pub mod role;
pub mod store;
pub mod user;
pub mod user_role;
