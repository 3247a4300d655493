//! Cron jobs for automated maintenance tasks.

pub mod booking_maintenance;
