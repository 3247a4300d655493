use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateClassDto {
    pub name: String,
    pub instructor: String,
    pub description: Option<String>,
    pub starts_at: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub duration_minutes: i32,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateClassDto {
    pub name: String,
    pub instructor: String,
    pub description: Option<String>,
    pub starts_at: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub duration_minutes: i32,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ClassDto {
    pub id: i32,
    pub name: String,
    pub instructor: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    /// Seats currently held by pending or confirmed bookings.
    pub booked_seats: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedClassesDto {
    pub classes: Vec<ClassDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
