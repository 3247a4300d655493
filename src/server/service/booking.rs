use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        booking::{BookingDto, CreateBookingDto, PaginatedBookingsDto},
        event::BoardEvent,
    },
    server::{
        data::{booking::BookingRepository, class::ClassRepository},
        error::AppError,
        model::booking::{Booking, BookingStatus, CreateBookingParams},
        realtime::EventBus,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Creates a new pending booking for a class.
    ///
    /// The seat is held immediately; confirmation (or the hold-expiry job)
    /// settles its fate. Capacity counts pending and confirmed bookings.
    ///
    /// # Arguments
    /// - `dto`: Booking creation data
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The created booking
    /// - `Err(AppError::NotFound)`: Unknown class
    /// - `Err(AppError::BadRequest)`: Class has already started
    /// - `Err(AppError::Conflict)`: Class is fully booked
    pub async fn create(&self, dto: CreateBookingDto) -> Result<BookingDto, AppError> {
        let class = ClassRepository::new(self.db)
            .get_by_id(dto.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        if class.starts_at <= Utc::now() {
            return Err(AppError::BadRequest(
                "Class has already started".to_string(),
            ));
        }

        let repo = BookingRepository::new(self.db);
        let held_seats = repo.count_active_for_class(class.id).await?;

        if held_seats >= class.capacity as u64 {
            return Err(AppError::Conflict("Class is fully booked".to_string()));
        }

        let booking = repo
            .create(CreateBookingParams {
                class_id: dto.class_id,
                customer_name: dto.customer_name,
                customer_email: dto.customer_email,
            })
            .await?;

        self.events.emit_lossy(BoardEvent::BookingCreated {
            booking_id: booking.id,
            class_id: booking.class_id,
            timestamp: Utc::now(),
        });

        Ok(Self::to_dto(booking))
    }

    /// Gets a booking by ID.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The booking
    /// - `Err(AppError::NotFound)`: No booking with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<BookingDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(Self::to_dto(booking))
    }

    /// Gets a page of bookings, newest first, optionally scoped to a class.
    pub async fn list(
        &self,
        class_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookingsDto, AppError> {
        let (bookings, total, total_pages) = BookingRepository::new(self.db)
            .get_paginated(class_id, page, per_page)
            .await?;

        Ok(PaginatedBookingsDto {
            bookings: bookings.into_iter().map(Self::to_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Confirms a pending booking.
    ///
    /// Confirming an already-confirmed booking is a no-op; confirming a
    /// cancelled one is a conflict.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The (now) confirmed booking
    /// - `Err(AppError::NotFound)`: No booking with that ID
    /// - `Err(AppError::Conflict)`: Booking was cancelled
    pub async fn confirm(&self, id: i32) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);
        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        match booking.status {
            BookingStatus::Cancelled => {
                Err(AppError::Conflict("Booking has been cancelled".to_string()))
            }
            BookingStatus::Confirmed => Ok(Self::to_dto(booking)),
            BookingStatus::Pending => {
                let confirmed = repo
                    .set_status(id, BookingStatus::Confirmed)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

                self.events.emit_lossy(BoardEvent::BookingConfirmed {
                    booking_id: confirmed.id,
                    class_id: confirmed.class_id,
                    timestamp: Utc::now(),
                });

                Ok(Self::to_dto(confirmed))
            }
        }
    }

    /// Cancels a booking, releasing its seat.
    ///
    /// Cancelling an already-cancelled booking is a no-op.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The cancelled booking
    /// - `Err(AppError::NotFound)`: No booking with that ID
    pub async fn cancel(&self, id: i32) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);
        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status == BookingStatus::Cancelled {
            return Ok(Self::to_dto(booking));
        }

        let cancelled = repo
            .set_status(id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        self.events.emit_lossy(BoardEvent::BookingCancelled {
            booking_id: cancelled.id,
            class_id: cancelled.class_id,
            reason: "cancelled by customer".to_string(),
            timestamp: Utc::now(),
        });

        Ok(Self::to_dto(cancelled))
    }

    fn to_dto(booking: Booking) -> BookingDto {
        BookingDto {
            id: booking.id,
            class_id: booking.class_id,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
