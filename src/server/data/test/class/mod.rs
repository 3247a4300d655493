use crate::server::{
    data::class::ClassRepository,
    model::class::{CreateClassParams, UpdateClassParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod reminders;
mod update;

fn create_params(starts_at: chrono::DateTime<Utc>) -> CreateClassParams {
    CreateClassParams {
        name: "Test Class".to_string(),
        instructor: "Ada".to_string(),
        description: Some("Test description".to_string()),
        starts_at,
        duration_minutes: 60,
        capacity: 10,
    }
}
