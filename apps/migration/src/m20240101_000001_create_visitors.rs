//! Create the `visitors` table.
//!
//! One row per guestbook post; `heart` is the only column updated after insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visitors::Table)
                    .if_not_exists()
                    .col(pk_auto(Visitors::Id))
                    .col(text(Visitors::Name))
                    .col(text(Visitors::Body))
                    .col(
                        timestamp_with_time_zone(Visitors::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Visitors::Heart).default(0))
                    .to_owned(),
            )
            .await?;

        // Every listing sorts on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_visitors_created_at")
                    .table(Visitors::Table)
                    .col(Visitors::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visitors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Visitors {
    Table,
    Id,
    Name,
    Body,
    CreatedAt,
    Heart,
}
