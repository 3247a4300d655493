use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateBookingDto {
    pub class_id: i32,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BookingDto {
    pub id: i32,
    pub class_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    /// One of `pending`, `confirmed`, or `cancelled`.
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
