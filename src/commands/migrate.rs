//! Migrate command - applies, reverts or reports schema migrations.

use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, Migrator};

pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config, false).await?;
    let conn = db.connection();

    match args.action {
        MigrateAction::Up => Migrator::up(conn, None).await?,
        MigrateAction::Down => Migrator::down(conn, Some(1)).await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table before re-applying migrations");
            Migrator::fresh(conn).await?
        }
        MigrateAction::Status => {
            for migration in Migrator::get_migration_with_status(conn).await? {
                println!("{}: {}", migration.name(), status_label(migration.status()));
            }
        }
    }

    tracing::info!(action = ?args.action, "Migration command finished");
    Ok(())
}

fn status_label(status: MigrationStatus) -> &'static str {
    match status {
        MigrationStatus::Applied => "applied",
        MigrationStatus::Pending => "pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::MigrationName;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(MigrationStatus::Applied), "applied");
        assert_eq!(status_label(MigrationStatus::Pending), "pending");
    }

    #[test]
    fn test_migrations_are_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 3);
    }
}
