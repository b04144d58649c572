//! Migration: monitored stores.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Stores::Name).string().not_null())
                    .col(ColumnDef::new(Stores::NumberStore).integer().not_null())
                    .col(ColumnDef::new(Stores::AmountSensor).integer().not_null())
                    .col(ColumnDef::new(Stores::FillPercent).integer().not_null())
                    .col(ColumnDef::new(Stores::Color).string().not_null())
                    .col(ColumnDef::new(Stores::Ubication).string().not_null())
                    .col(
                        ColumnDef::new(Stores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
    Name,
    NumberStore,
    AmountSensor,
    FillPercent,
    Color,
    Ubication,
    CreatedAt,
}
