use sea_orm::DatabaseConnection;

use crate::{
    model::block::{CreateTimeBlockDto, TimeBlockDto},
    server::{
        data::time_block::TimeBlockRepository,
        error::AppError,
        model::time_block::{CreateTimeBlockParams, TimeBlock},
        util::parse::parse_datetime_utc,
    },
};

pub struct TimeBlockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeBlockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new time block.
    ///
    /// # Returns
    /// - `Ok(TimeBlockDto)`: The created block
    /// - `Err(AppError::BadRequest)`: Malformed times or an empty interval
    pub async fn create(&self, dto: CreateTimeBlockDto) -> Result<TimeBlockDto, AppError> {
        let starts_at = parse_datetime_utc(&dto.starts_at)?;
        let ends_at = parse_datetime_utc(&dto.ends_at)?;

        if ends_at <= starts_at {
            return Err(AppError::BadRequest(
                "Block must end after it starts".to_string(),
            ));
        }

        let block = TimeBlockRepository::new(self.db)
            .create(CreateTimeBlockParams {
                starts_at,
                ends_at,
                reason: dto.reason,
            })
            .await?;

        Ok(Self::to_dto(block))
    }

    /// Gets all time blocks, earliest first.
    pub async fn list(&self) -> Result<Vec<TimeBlockDto>, AppError> {
        let blocks = TimeBlockRepository::new(self.db).get_all().await?;

        Ok(blocks.into_iter().map(Self::to_dto).collect())
    }

    /// Deletes a time block.
    ///
    /// # Returns
    /// - `Ok(())`: Block deleted
    /// - `Err(AppError::NotFound)`: No block with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows_affected = TimeBlockRepository::new(self.db).delete(id).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound("Time block not found".to_string()));
        }

        Ok(())
    }

    fn to_dto(block: TimeBlock) -> TimeBlockDto {
        TimeBlockDto {
            id: block.id,
            starts_at: block.starts_at,
            ends_at: block.ends_at,
            reason: block.reason,
            created_at: block.created_at,
        }
    }
}
