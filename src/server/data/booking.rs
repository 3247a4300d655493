//! Booking data repository for database operations.
//!
//! Provides the `BookingRepository` for managing booking records: creation,
//! lookup, paginated listing, status transitions, seat counting, and the
//! bulk hold-expiry operation used by the maintenance scheduler.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, BookingStatus, CreateBookingParams};

/// Repository providing database operations for booking management.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending booking.
    ///
    /// # Arguments
    /// - `params`: Booking creation parameters
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking
    /// - `Err(DbErr)`: Database error (including unknown class_id)
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let now = Utc::now();

        let booking = entity::booking::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            customer_name: ActiveValue::Set(params.customer_name),
            customer_email: ActiveValue::Set(params.customer_email),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Gets a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))`: The booking
    /// - `Ok(None)`: Booking not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Gets paginated bookings, newest first, optionally filtered by class.
    ///
    /// # Arguments
    /// - `class_id`: Restrict to one class when set
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((bookings, total_items, total_pages))`: Page of bookings and totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        class_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(class_id) = class_id {
            query = query.filter(entity::booking::Column::ClassId.eq(class_id));
        }

        let query = query.order_by_desc(entity::booking::Column::CreatedAt);

        let paginator = query.paginate(self.db, per_page);
        let stats = paginator.num_items_and_pages().await?;
        let bookings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect();

        Ok((bookings, stats.number_of_items, stats.number_of_pages))
    }

    /// Counts seats held for a class by bookings that are not cancelled.
    ///
    /// Pending bookings hold their seat until confirmed or expired, so both
    /// pending and confirmed bookings count against capacity.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of held seats
    /// - `Err(DbErr)`: Database error
    pub async fn count_active_for_class(&self, class_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ClassId.eq(class_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .count(self.db)
            .await
    }

    /// Sets a booking's status and bumps its update timestamp.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))`: The updated booking
    /// - `Ok(None)`: Booking not found
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        if let Some(booking) = booking {
            let mut active_model: entity::booking::ActiveModel = booking.into();
            active_model.status = ActiveValue::Set(status.as_str().to_string());
            active_model.updated_at = ActiveValue::Set(Utc::now());

            let updated = active_model.update(self.db).await?;

            Ok(Some(Booking::from_entity(updated)))
        } else {
            Ok(None)
        }
    }

    /// Cancels every pending booking created before the cutoff.
    ///
    /// Used by the hold-expiry job: pending bookings keep their seat for a
    /// fixed window; after that the seat goes back to the pool.
    ///
    /// # Arguments
    /// - `cutoff`: Bookings created strictly before this instant expire
    ///
    /// # Returns
    /// - `Ok(bookings)`: The bookings that were cancelled, post-update
    /// - `Err(DbErr)`: Database error
    pub async fn cancel_pending_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DbErr> {
        let stale = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Pending.as_str()))
            .filter(entity::booking::Column::CreatedAt.lt(cutoff))
            .all(self.db)
            .await?;

        let mut cancelled = Vec::with_capacity(stale.len());

        for booking in stale {
            let mut active_model: entity::booking::ActiveModel = booking.into();
            active_model.status = ActiveValue::Set(BookingStatus::Cancelled.as_str().to_string());
            active_model.updated_at = ActiveValue::Set(Utc::now());

            let updated = active_model.update(self.db).await?;
            cancelled.push(Booking::from_entity(updated));
        }

        Ok(cancelled)
    }
}
