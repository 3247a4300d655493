//! Domain models for class data operations.

use chrono::{DateTime, Duration, Utc};

/// A bookable class session.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// Unique identifier for the class.
    pub id: i32,
    /// Display name of the class.
    pub name: String,
    /// Name of the instructor running the class.
    pub instructor: String,
    /// Optional description of the class.
    pub description: Option<String>,
    /// Scheduled start time.
    pub starts_at: DateTime<Utc>,
    /// Length of the class in minutes.
    pub duration_minutes: i32,
    /// Maximum number of bookable seats.
    pub capacity: i32,
    /// Whether the pre-start reminder has been broadcast.
    pub reminder_sent: bool,
    /// Timestamp when the class was created.
    pub created_at: DateTime<Utc>,
}

impl Class {
    /// Converts an entity model to a class domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Class` - The converted class domain model
    pub fn from_entity(entity: entity::class::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            instructor: entity.instructor,
            description: entity.description,
            starts_at: entity.starts_at,
            duration_minutes: entity.duration_minutes,
            capacity: entity.capacity,
            reminder_sent: entity.reminder_sent,
            created_at: entity.created_at,
        }
    }

    /// Scheduled end time, derived from start time and duration.
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::minutes(self.duration_minutes as i64)
    }
}

/// Parameters for creating a new class.
#[derive(Debug, Clone)]
pub struct CreateClassParams {
    /// Display name of the class.
    pub name: String,
    /// Name of the instructor running the class.
    pub instructor: String,
    /// Optional description of the class.
    pub description: Option<String>,
    /// Scheduled start time.
    pub starts_at: DateTime<Utc>,
    /// Length of the class in minutes.
    pub duration_minutes: i32,
    /// Maximum number of bookable seats.
    pub capacity: i32,
}

/// Parameters for updating an existing class. All fields replace the
/// stored values.
#[derive(Debug, Clone)]
pub struct UpdateClassParams {
    /// Display name of the class.
    pub name: String,
    /// Name of the instructor running the class.
    pub instructor: String,
    /// Optional description of the class.
    pub description: Option<String>,
    /// Scheduled start time.
    pub starts_at: DateTime<Utc>,
    /// Length of the class in minutes.
    pub duration_minutes: i32,
    /// Maximum number of bookable seats.
    pub capacity: i32,
}
