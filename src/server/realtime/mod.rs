//! Real-time event distribution.
//!
//! The `EventBus` is the process-wide broadcast handle shared by request
//! handlers and scheduled jobs; `sse` exposes the subscriber side to
//! clients as a server-sent-events stream.

pub mod sse;

use tokio::sync::broadcast;

use crate::model::event::BoardEvent;

/// Central event distribution bus for application-wide events.
///
/// Wraps `tokio::sync::broadcast`, providing:
/// - Non-blocking publish (slow subscribers don't block producers)
/// - Multiple concurrent subscribers
/// - Automatic cleanup when subscribers drop
///
/// One bus is created at startup and threaded through `AppState` and the
/// scheduler; it is never stored in a global.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BoardEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with the specified channel capacity.
    ///
    /// # Arguments
    /// - `capacity` - Number of events buffered before the oldest are dropped
    ///   for lagging subscribers
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events.
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers.
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists,
    /// `Err` otherwise.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: BoardEvent,
    ) -> Result<usize, broadcast::error::SendError<BoardEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring whether anyone is listening.
    ///
    /// Domain events are advisory: if no client is connected there is
    /// nothing to update, so a send failure is logged and dropped.
    pub fn emit_lossy(&self, event: BoardEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("No subscribers for event, dropping");
        }
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Configured channel capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
