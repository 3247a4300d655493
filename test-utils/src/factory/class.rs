//! Class factory for creating test class entities.
//!
//! This module provides factory methods for creating class entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// Provides a builder pattern for creating class entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class::ClassFactory;
///
/// let class = ClassFactory::new(&db)
///     .name("Evening Yoga")
///     .capacity(5)
///     .build()
///     .await?;
/// ```
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    instructor: String,
    description: Option<String>,
    starts_at: chrono::DateTime<Utc>,
    duration_minutes: i32,
    capacity: i32,
    reminder_sent: bool,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class {id}"` where id is auto-incremented
    /// - instructor: `"Instructor {id}"`
    /// - description: `Some("Test class description")`
    /// - starts_at: 1 hour from now
    /// - duration_minutes: `60`
    /// - capacity: `10`
    /// - reminder_sent: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClassFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            instructor: format!("Instructor {}", id),
            description: Some("Test class description".to_string()),
            starts_at: Utc::now() + chrono::Duration::hours(1),
            duration_minutes: 60,
            capacity: 10,
            reminder_sent: false,
        }
    }

    /// Sets the class name.
    ///
    /// # Arguments
    /// - `name` - Display name for the class
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instructor name.
    ///
    /// # Arguments
    /// - `instructor` - Name of the instructor running the class
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the class start time.
    ///
    /// # Arguments
    /// - `starts_at` - Scheduled start time for the class
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn starts_at(mut self, starts_at: chrono::DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    /// Sets the class duration in minutes.
    ///
    /// # Arguments
    /// - `duration_minutes` - Length of the class in minutes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the class capacity.
    ///
    /// # Arguments
    /// - `capacity` - Maximum number of bookable seats
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets whether the reminder has already been sent.
    ///
    /// # Arguments
    /// - `reminder_sent` - Whether the reminder flag should be set
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn reminder_sent(mut self, reminder_sent: bool) -> Self {
        self.reminder_sent = reminder_sent;
        self
    }

    /// Builds and inserts the class entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::class::Model)` - Created class entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            instructor: ActiveValue::Set(self.instructor),
            description: ActiveValue::Set(self.description),
            starts_at: ActiveValue::Set(self.starts_at),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            capacity: ActiveValue::Set(self.capacity),
            reminder_sent: ActiveValue::Set(self.reminder_sent),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values.
///
/// Shorthand for `ClassFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::class::Model)` - Created class entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).build().await
}
