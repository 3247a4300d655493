//! Class data repository for database operations.
//!
//! Provides the `ClassRepository` for managing class records: creation,
//! lookup, paginated listing, updates, deletion, and the reminder-window
//! queries used by the maintenance scheduler. Entity models are converted
//! to domain models at this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::class::{Class, CreateClassParams, UpdateClassParams};

/// Repository providing database operations for class management.
pub struct ClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassRepository<'a> {
    /// Creates a new ClassRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new class.
    ///
    /// # Arguments
    /// - `params`: Class creation parameters
    ///
    /// # Returns
    /// - `Ok(Class)`: The created class
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateClassParams) -> Result<Class, DbErr> {
        let class = entity::class::ActiveModel {
            name: ActiveValue::Set(params.name),
            instructor: ActiveValue::Set(params.instructor),
            description: ActiveValue::Set(params.description),
            starts_at: ActiveValue::Set(params.starts_at),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            capacity: ActiveValue::Set(params.capacity),
            reminder_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Class::from_entity(class))
    }

    /// Gets a class by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Class))`: The class
    /// - `Ok(None)`: Class not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, DbErr> {
        let class = entity::prelude::Class::find_by_id(id).one(self.db).await?;

        Ok(class.map(Class::from_entity))
    }

    /// Gets paginated classes ordered by start time (upcoming first).
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((classes, total_items, total_pages))`: Page of classes and totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Class>, u64, u64), DbErr> {
        let query =
            entity::prelude::Class::find().order_by_asc(entity::class::Column::StartsAt);

        let paginator = query.paginate(self.db, per_page);
        let stats = paginator.num_items_and_pages().await?;
        let classes = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect();

        Ok((classes, stats.number_of_items, stats.number_of_pages))
    }

    /// Updates a class, replacing all mutable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Class))`: The updated class
    /// - `Ok(None)`: Class not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateClassParams,
    ) -> Result<Option<Class>, DbErr> {
        let class = entity::prelude::Class::find_by_id(id).one(self.db).await?;

        if let Some(class) = class {
            let mut active_model: entity::class::ActiveModel = class.into();
            active_model.name = ActiveValue::Set(params.name);
            active_model.instructor = ActiveValue::Set(params.instructor);
            active_model.description = ActiveValue::Set(params.description);
            active_model.starts_at = ActiveValue::Set(params.starts_at);
            active_model.duration_minutes = ActiveValue::Set(params.duration_minutes);
            active_model.capacity = ActiveValue::Set(params.capacity);

            let updated = active_model.update(self.db).await?;

            Ok(Some(Class::from_entity(updated)))
        } else {
            Ok(None)
        }
    }

    /// Deletes a class by ID. Bookings and feedback cascade.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: Number of deleted rows (0 when absent)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Class::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets classes starting inside the reminder window that have not been
    /// reminded yet.
    ///
    /// # Arguments
    /// - `now`: Lower bound (exclusive) — classes already started are skipped
    /// - `window_end`: Upper bound (inclusive) of the reminder window
    ///
    /// # Returns
    /// - `Ok(classes)`: Classes due for a reminder, soonest first
    /// - `Err(DbErr)`: Database error
    pub async fn due_for_reminder(
        &self,
        now: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<Class>, DbErr> {
        let classes = entity::prelude::Class::find()
            .filter(entity::class::Column::ReminderSent.eq(false))
            .filter(entity::class::Column::StartsAt.gt(now))
            .filter(entity::class::Column::StartsAt.lte(window_end))
            .order_by_asc(entity::class::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(classes.into_iter().map(Class::from_entity).collect())
    }

    /// Marks a class's reminder as sent so the job fires at most once.
    ///
    /// # Returns
    /// - `Ok(())`: Flag set (or class no longer exists)
    /// - `Err(DbErr)`: Database error
    pub async fn mark_reminder_sent(&self, id: i32) -> Result<(), DbErr> {
        let class = entity::prelude::Class::find_by_id(id).one(self.db).await?;

        if let Some(class) = class {
            let mut active_model: entity::class::ActiveModel = class.into();
            active_model.reminder_sent = ActiveValue::Set(true);
            active_model.update(self.db).await?;
        }

        Ok(())
    }
}
