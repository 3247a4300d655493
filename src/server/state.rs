//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction, so
//! handlers and jobs can reach the database and the event bus without
//! re-acquiring them.

use sea_orm::DatabaseConnection;

use crate::server::realtime::EventBus;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `EventBus` wraps a broadcast sender (clones share the channel)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Broadcast handle for pushing real-time events to connected clients.
    pub events: EventBus,
}

impl AppState {
    pub fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }
}
