//! Domain models for booking data operations.

use chrono::{DateTime, Utc};

/// Lifecycle state of a booking.
///
/// A booking starts `pending` and either gets confirmed by the customer
/// or cancelled — explicitly, or by the hold-expiry job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Storage representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a storage representation back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A reserved seat in a class.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: i32,
    /// ID of the class this booking belongs to.
    pub class_id: i32,
    /// Name of the customer holding the booking.
    pub customer_name: String,
    /// Email address of the customer.
    pub customer_email: String,
    /// Current lifecycle state.
    pub status: BookingStatus,
    /// Timestamp when the booking was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Booking` - The converted booking domain model
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            status: BookingStatus::parse(&entity.status).unwrap_or(BookingStatus::Pending),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    /// ID of the class being booked.
    pub class_id: i32,
    /// Name of the customer holding the booking.
    pub customer_name: String,
    /// Email address of the customer.
    pub customer_email: String,
}
