use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(string(Class::Name))
                    .col(string(Class::Instructor))
                    .col(text_null(Class::Description))
                    .col(timestamp(Class::StartsAt))
                    .col(integer(Class::DurationMinutes))
                    .col(integer(Class::Capacity))
                    .col(boolean(Class::ReminderSent).default(false))
                    .col(
                        timestamp(Class::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    Table,
    Id,
    Name,
    Instructor,
    Description,
    StartsAt,
    DurationMinutes,
    Capacity,
    ReminderSent,
    CreatedAt,
}
