//! Domain models for feedback data operations.

use chrono::{DateTime, Utc};

/// Post-class feedback left by an attendee.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    /// Unique identifier for the feedback entry.
    pub id: i32,
    /// ID of the class the feedback refers to.
    pub class_id: i32,
    /// Name of the attendee leaving feedback.
    pub author_name: String,
    /// Rating from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// Timestamp when the feedback was created.
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Converts an entity model to a feedback domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Feedback` - The converted feedback domain model
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            author_name: entity.author_name,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new feedback entry.
#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    /// ID of the class the feedback refers to.
    pub class_id: i32,
    /// Name of the attendee leaving feedback.
    pub author_name: String,
    /// Rating from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}
