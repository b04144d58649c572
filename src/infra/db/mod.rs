//! Postgres connection handle.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Shared SeaORM connection; cloning shares the pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool, applying pending migrations first when `migrate` is set.
    pub async fn connect(config: &Config, migrate: bool) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;

        if migrate {
            Migrator::up(&connection, None).await.inspect_err(|e| {
                tracing::error!(error = %e, "Pending migrations failed");
            })?;
            tracing::info!("Database schema up to date");
        }

        Ok(Self { connection })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Round-trip to the server, for the health probe.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
