use crate::server::{data::feedback::FeedbackRepository, model::feedback::CreateFeedbackParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
