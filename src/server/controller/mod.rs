//! HTTP request handlers and route definitions for each resource.
//!
//! Controllers deserialize request DTOs, delegate to the service layer,
//! and shape the success response. Errors bubble up as `AppError`, which
//! the error layer renders; no controller formats its own error body.

pub mod block;
pub mod booking;
pub mod class;
pub mod feedback;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// Optional class scope for list endpoints.
#[derive(Deserialize)]
pub struct ClassFilterQuery {
    pub class_id: Option<i32>,
}
