use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeBlock::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeBlock::Id))
                    .col(timestamp(TimeBlock::StartsAt))
                    .col(timestamp(TimeBlock::EndsAt))
                    .col(text_null(TimeBlock::Reason))
                    .col(
                        timestamp(TimeBlock::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeBlock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeBlock {
    Table,
    Id,
    StartsAt,
    EndsAt,
    Reason,
    CreatedAt,
}
