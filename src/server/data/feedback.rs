//! Feedback data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::feedback::{CreateFeedbackParams, Feedback};

/// Repository providing database operations for feedback management.
pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    /// Creates a new FeedbackRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new feedback entry.
    ///
    /// # Returns
    /// - `Ok(Feedback)`: The created entry
    /// - `Err(DbErr)`: Database error (including unknown class_id)
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, DbErr> {
        let feedback = entity::feedback::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            author_name: ActiveValue::Set(params.author_name),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(feedback))
    }

    /// Gets paginated feedback, newest first, optionally filtered by class.
    ///
    /// # Arguments
    /// - `class_id`: Restrict to one class when set
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((feedback, total_items, total_pages))`: Page of entries and totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        class_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Feedback>, u64, u64), DbErr> {
        let mut query = entity::prelude::Feedback::find();

        if let Some(class_id) = class_id {
            query = query.filter(entity::feedback::Column::ClassId.eq(class_id));
        }

        let query = query.order_by_desc(entity::feedback::Column::CreatedAt);

        let paginator = query.paginate(self.db, per_page);
        let stats = paginator.num_items_and_pages().await?;
        let feedback = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Feedback::from_entity)
            .collect();

        Ok((feedback, stats.number_of_items, stats.number_of_pages))
    }
}
