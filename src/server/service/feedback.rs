use sea_orm::DatabaseConnection;

use crate::{
    model::feedback::{CreateFeedbackDto, FeedbackDto, PaginatedFeedbackDto},
    server::{
        data::{class::ClassRepository, feedback::FeedbackRepository},
        error::AppError,
        model::feedback::{CreateFeedbackParams, Feedback},
    },
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records feedback for a class.
    ///
    /// # Returns
    /// - `Ok(FeedbackDto)`: The created entry
    /// - `Err(AppError::BadRequest)`: Rating outside 1..=5
    /// - `Err(AppError::NotFound)`: Unknown class
    pub async fn create(&self, dto: CreateFeedbackDto) -> Result<FeedbackDto, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        ClassRepository::new(self.db)
            .get_by_id(dto.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        let feedback = FeedbackRepository::new(self.db)
            .create(CreateFeedbackParams {
                class_id: dto.class_id,
                author_name: dto.author_name,
                rating: dto.rating,
                comment: dto.comment,
            })
            .await?;

        Ok(Self::to_dto(feedback))
    }

    /// Gets a page of feedback, newest first, optionally scoped to a class.
    pub async fn list(
        &self,
        class_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedFeedbackDto, AppError> {
        let (feedback, total, total_pages) = FeedbackRepository::new(self.db)
            .get_paginated(class_id, page, per_page)
            .await?;

        Ok(PaginatedFeedbackDto {
            feedback: feedback.into_iter().map(Self::to_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    fn to_dto(feedback: Feedback) -> FeedbackDto {
        FeedbackDto {
            id: feedback.id,
            class_id: feedback.class_id,
            author_name: feedback.author_name,
            rating: feedback.rating,
            comment: feedback.comment,
            created_at: feedback.created_at,
        }
    }
}
