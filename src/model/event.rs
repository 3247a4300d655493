use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Real-time events broadcast to connected clients.
///
/// Events are emitted by the service layer and the maintenance scheduler
/// through the shared event bus and serialized for SSE transmission. The
/// `type` tag carries the variant name so clients can subscribe per kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// A new class was published.
    ClassCreated {
        class_id: i32,
        name: String,
        #[serde(with = "chrono::serde::ts_seconds")]
        starts_at: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// An existing class changed (time, capacity, details).
    ClassUpdated {
        class_id: i32,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// A class was removed; its bookings are gone with it.
    ClassDeleted {
        class_id: i32,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// A seat was reserved (pending confirmation).
    BookingCreated {
        booking_id: i32,
        class_id: i32,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// A pending booking was confirmed.
    BookingConfirmed {
        booking_id: i32,
        class_id: i32,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// A booking was cancelled, by the customer or by the hold-expiry job.
    BookingCancelled {
        booking_id: i32,
        class_id: i32,
        reason: String,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },

    /// A class starts soon; emitted once per class by the reminder job.
    ClassReminder {
        class_id: i32,
        name: String,
        #[serde(with = "chrono::serde::ts_seconds")]
        starts_at: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_seconds")]
        timestamp: DateTime<Utc>,
    },
}

impl BoardEvent {
    /// Variant name used as the SSE `event` field.
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::ClassCreated { .. } => "ClassCreated",
            BoardEvent::ClassUpdated { .. } => "ClassUpdated",
            BoardEvent::ClassDeleted { .. } => "ClassDeleted",
            BoardEvent::BookingCreated { .. } => "BookingCreated",
            BoardEvent::BookingConfirmed { .. } => "BookingConfirmed",
            BoardEvent::BookingCancelled { .. } => "BookingCancelled",
            BoardEvent::ClassReminder { .. } => "ClassReminder",
        }
    }
}
