//! Feedback factory for creating test feedback entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test feedback with customizable fields.
///
/// Provides a builder pattern for creating feedback entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    author_name: String,
    rating: i32,
    comment: Option<String>,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values.
    ///
    /// Defaults:
    /// - author_name: `"Attendee {id}"` where id is auto-incremented
    /// - rating: `5`
    /// - comment: `Some("Great class")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `class_id` - Class ID the feedback refers to
    ///
    /// # Returns
    /// - `FeedbackFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, class_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            class_id,
            author_name: format!("Attendee {}", id),
            rating: 5,
            comment: Some("Great class".to_string()),
        }
    }

    /// Sets the author name.
    ///
    /// # Arguments
    /// - `author_name` - Name of the attendee leaving feedback
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = author_name.into();
        self
    }

    /// Sets the rating.
    ///
    /// # Arguments
    /// - `rating` - Rating from 1 to 5
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the comment.
    ///
    /// # Arguments
    /// - `comment` - Optional free-text comment
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::feedback::Model)` - Created feedback entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            id: ActiveValue::NotSet,
            class_id: ActiveValue::Set(self.class_id),
            author_name: ActiveValue::Set(self.author_name),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates feedback with default values for the specified class.
///
/// Shorthand for `FeedbackFactory::new(db, class_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `class_id` - Class ID the feedback refers to
///
/// # Returns
/// - `Ok(entity::feedback::Model)` - Created feedback entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feedback(
    db: &DatabaseConnection,
    class_id: i32,
) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db, class_id).build().await
}
