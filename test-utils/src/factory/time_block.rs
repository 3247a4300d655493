//! Time block factory for creating test time block entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time blocks with customizable fields.
///
/// Provides a builder pattern for creating time block entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct TimeBlockFactory<'a> {
    db: &'a DatabaseConnection,
    starts_at: chrono::DateTime<Utc>,
    ends_at: chrono::DateTime<Utc>,
    reason: Option<String>,
}

impl<'a> TimeBlockFactory<'a> {
    /// Creates a new TimeBlockFactory with default values.
    ///
    /// Defaults:
    /// - starts_at: 1 hour from now
    /// - ends_at: 2 hours from now
    /// - reason: `Some("Maintenance")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TimeBlockFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            starts_at: Utc::now() + chrono::Duration::hours(1),
            ends_at: Utc::now() + chrono::Duration::hours(2),
            reason: Some("Maintenance".to_string()),
        }
    }

    /// Sets the block start time.
    ///
    /// # Arguments
    /// - `starts_at` - Start of the blocked period
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn starts_at(mut self, starts_at: chrono::DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    /// Sets the block end time.
    ///
    /// # Arguments
    /// - `ends_at` - End of the blocked period
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn ends_at(mut self, ends_at: chrono::DateTime<Utc>) -> Self {
        self.ends_at = ends_at;
        self
    }

    /// Sets the block reason.
    ///
    /// # Arguments
    /// - `reason` - Optional human-readable reason for the block
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    /// Builds and inserts the time block entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::time_block::Model)` - Created time block entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::time_block::Model, DbErr> {
        entity::time_block::ActiveModel {
            id: ActiveValue::NotSet,
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time block with default values.
///
/// Shorthand for `TimeBlockFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::time_block::Model)` - Created time block entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_time_block(
    db: &DatabaseConnection,
) -> Result<entity::time_block::Model, DbErr> {
    TimeBlockFactory::new(db).build().await
}
