pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_class_table;
mod m20260302_000002_create_time_block_table;
mod m20260302_000003_create_booking_table;
mod m20260302_000004_create_feedback_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_class_table::Migration),
            Box::new(m20260302_000002_create_time_block_table::Migration),
            Box::new(m20260302_000003_create_booking_table::Migration),
            Box::new(m20260302_000004_create_feedback_table::Migration),
        ]
    }
}
