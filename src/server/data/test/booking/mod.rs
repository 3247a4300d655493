use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingStatus, CreateBookingParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expire;
mod get_paginated;
mod status;
