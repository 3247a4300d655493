//! Domain models for time block data operations.

use chrono::{DateTime, Utc};

/// A blocked-out period during which no class may be scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBlock {
    /// Unique identifier for the block.
    pub id: i32,
    /// Start of the blocked period.
    pub starts_at: DateTime<Utc>,
    /// End of the blocked period.
    pub ends_at: DateTime<Utc>,
    /// Optional human-readable reason for the block.
    pub reason: Option<String>,
    /// Timestamp when the block was created.
    pub created_at: DateTime<Utc>,
}

impl TimeBlock {
    /// Converts an entity model to a time block domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TimeBlock` - The converted time block domain model
    pub fn from_entity(entity: entity::time_block::Model) -> Self {
        Self {
            id: entity.id,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new time block.
#[derive(Debug, Clone)]
pub struct CreateTimeBlockParams {
    /// Start of the blocked period.
    pub starts_at: DateTime<Utc>,
    /// End of the blocked period.
    pub ends_at: DateTime<Utc>,
    /// Optional human-readable reason for the block.
    pub reason: Option<String>,
}
