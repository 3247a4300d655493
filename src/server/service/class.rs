use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        class::{ClassDto, CreateClassDto, PaginatedClassesDto, UpdateClassDto},
        event::BoardEvent,
    },
    server::{
        data::{
            booking::BookingRepository, class::ClassRepository,
            time_block::TimeBlockRepository,
        },
        error::AppError,
        model::class::{Class, CreateClassParams, UpdateClassParams},
        realtime::EventBus,
        util::parse::parse_datetime_utc,
    },
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Creates a new class.
    ///
    /// # Arguments
    /// - `dto`: Class creation data
    ///
    /// # Returns
    /// - `Ok(ClassDto)`: The created class
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(&self, dto: CreateClassDto) -> Result<ClassDto, AppError> {
        let starts_at = parse_datetime_utc(&dto.starts_at)?;

        self.validate_schedule(starts_at, dto.duration_minutes, dto.capacity)
            .await?;

        let repo = ClassRepository::new(self.db);
        let class = repo
            .create(CreateClassParams {
                name: dto.name,
                instructor: dto.instructor,
                description: dto.description,
                starts_at,
                duration_minutes: dto.duration_minutes,
                capacity: dto.capacity,
            })
            .await?;

        self.events.emit_lossy(BoardEvent::ClassCreated {
            class_id: class.id,
            name: class.name.clone(),
            starts_at: class.starts_at,
            timestamp: Utc::now(),
        });

        Ok(Self::to_dto(class, 0))
    }

    /// Gets a class by ID with its current seat count.
    ///
    /// # Returns
    /// - `Ok(ClassDto)`: The class
    /// - `Err(AppError::NotFound)`: No class with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<ClassDto, AppError> {
        let class = ClassRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        let booked_seats = BookingRepository::new(self.db)
            .count_active_for_class(class.id)
            .await?;

        Ok(Self::to_dto(class, booked_seats))
    }

    /// Gets a page of classes ordered by start time, with seat counts.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedClassesDto, AppError> {
        let (classes, total, total_pages) = ClassRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let booking_repo = BookingRepository::new(self.db);
        let mut dtos = Vec::with_capacity(classes.len());

        for class in classes {
            let booked_seats = booking_repo.count_active_for_class(class.id).await?;
            dtos.push(Self::to_dto(class, booked_seats));
        }

        Ok(PaginatedClassesDto {
            classes: dtos,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a class, replacing all mutable fields.
    ///
    /// # Returns
    /// - `Ok(ClassDto)`: The updated class
    /// - `Err(AppError::NotFound)`: No class with that ID
    /// - `Err(AppError::BadRequest)`: Validation failure
    pub async fn update(&self, id: i32, dto: UpdateClassDto) -> Result<ClassDto, AppError> {
        let starts_at = parse_datetime_utc(&dto.starts_at)?;

        self.validate_schedule(starts_at, dto.duration_minutes, dto.capacity)
            .await?;

        let class = ClassRepository::new(self.db)
            .update(
                id,
                UpdateClassParams {
                    name: dto.name,
                    instructor: dto.instructor,
                    description: dto.description,
                    starts_at,
                    duration_minutes: dto.duration_minutes,
                    capacity: dto.capacity,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        self.events.emit_lossy(BoardEvent::ClassUpdated {
            class_id: class.id,
            timestamp: Utc::now(),
        });

        let booked_seats = BookingRepository::new(self.db)
            .count_active_for_class(class.id)
            .await?;

        Ok(Self::to_dto(class, booked_seats))
    }

    /// Deletes a class. Its bookings and feedback cascade.
    ///
    /// # Returns
    /// - `Ok(())`: Class deleted
    /// - `Err(AppError::NotFound)`: No class with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows_affected = ClassRepository::new(self.db).delete(id).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        self.events.emit_lossy(BoardEvent::ClassDeleted {
            class_id: id,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Validates schedule parameters against basic limits and the blocked
    /// periods on the calendar.
    async fn validate_schedule(
        &self,
        starts_at: DateTime<Utc>,
        duration_minutes: i32,
        capacity: i32,
    ) -> Result<(), AppError> {
        if capacity < 1 {
            return Err(AppError::BadRequest(
                "Capacity must be at least 1".to_string(),
            ));
        }

        if duration_minutes < 1 {
            return Err(AppError::BadRequest(
                "Duration must be at least 1 minute".to_string(),
            ));
        }

        let ends_at = starts_at + chrono::Duration::minutes(duration_minutes as i64);
        let blocks = TimeBlockRepository::new(self.db)
            .overlapping(starts_at, ends_at)
            .await?;

        if !blocks.is_empty() {
            return Err(AppError::BadRequest(
                "Class time falls within a blocked period".to_string(),
            ));
        }

        Ok(())
    }

    fn to_dto(class: Class, booked_seats: u64) -> ClassDto {
        ClassDto {
            id: class.id,
            name: class.name,
            instructor: class.instructor,
            description: class.description,
            starts_at: class.starts_at,
            duration_minutes: class.duration_minutes,
            capacity: class.capacity,
            booked_seats,
            created_at: class.created_at,
        }
    }
}
