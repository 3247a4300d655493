use crate::server::{data::time_block::TimeBlockRepository, model::time_block::CreateTimeBlockParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod overlapping;
