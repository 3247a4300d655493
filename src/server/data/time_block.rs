//! Time block data repository for database operations.
//!
//! Provides the `TimeBlockRepository` for managing blocked-out periods,
//! including the overlap query the class service uses to keep classes out
//! of blocked time.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::time_block::{CreateTimeBlockParams, TimeBlock};

/// Repository providing database operations for time block management.
pub struct TimeBlockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeBlockRepository<'a> {
    /// Creates a new TimeBlockRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new time block.
    ///
    /// # Returns
    /// - `Ok(TimeBlock)`: The created block
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTimeBlockParams) -> Result<TimeBlock, DbErr> {
        let block = entity::time_block::ActiveModel {
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            reason: ActiveValue::Set(params.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeBlock::from_entity(block))
    }

    /// Gets all time blocks ordered by start time.
    ///
    /// # Returns
    /// - `Ok(blocks)`: All blocks, earliest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<TimeBlock>, DbErr> {
        let blocks = entity::prelude::TimeBlock::find()
            .order_by_asc(entity::time_block::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(blocks.into_iter().map(TimeBlock::from_entity).collect())
    }

    /// Deletes a time block by ID.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: Number of deleted rows (0 when absent)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TimeBlock::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets blocks overlapping the given half-open interval.
    ///
    /// Intervals that merely touch at an endpoint do not overlap.
    ///
    /// # Arguments
    /// - `starts_at`: Start of the candidate interval
    /// - `ends_at`: End of the candidate interval
    ///
    /// # Returns
    /// - `Ok(blocks)`: Overlapping blocks, earliest first
    /// - `Err(DbErr)`: Database error
    pub async fn overlapping(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Vec<TimeBlock>, DbErr> {
        let blocks = entity::prelude::TimeBlock::find()
            .filter(entity::time_block::Column::StartsAt.lt(ends_at))
            .filter(entity::time_block::Column::EndsAt.gt(starts_at))
            .order_by_asc(entity::time_block::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(blocks.into_iter().map(TimeBlock::from_entity).collect())
    }
}
