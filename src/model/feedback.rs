use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateFeedbackDto {
    pub class_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FeedbackDto {
    pub id: i32,
    pub class_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedFeedbackDto {
    pub feedback: Vec<FeedbackDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
