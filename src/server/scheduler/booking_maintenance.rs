use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::event::BoardEvent,
    server::{
        data::{booking::BookingRepository, class::ClassRepository},
        error::AppError,
        realtime::EventBus,
    },
};

/// How long a pending booking holds its seat before auto-cancellation.
const BOOKING_HOLD_MINUTES: i64 = 30;

/// How far ahead of the start time class reminders go out.
const REMINDER_LEAD_MINUTES: i64 = 60;

/// Starts the booking maintenance scheduler.
///
/// This scheduler runs every minute and checks for:
/// - Pending bookings whose hold window has lapsed (auto-cancellation)
/// - Classes starting soon that have not had their reminder broadcast
///
/// # Arguments
/// - `db`: Database connection
/// - `events`: Broadcast handle for pushing updates to connected clients
pub async fn start_scheduler(db: DatabaseConnection, events: EventBus) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_events = events.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let events = job_events.clone();

        Box::pin(async move {
            if let Err(e) = process_booking_maintenance(&db, &events).await {
                tracing::error!("Error processing booking maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking maintenance scheduler started");

    Ok(())
}

/// Processes one maintenance tick: hold expiry, then reminders.
async fn process_booking_maintenance(
    db: &DatabaseConnection,
    events: &EventBus,
) -> Result<(), AppError> {
    let now = Utc::now();

    if let Err(e) = expire_pending_bookings(db, events, now).await {
        tracing::error!("Error expiring pending bookings: {}", e);
    }

    if let Err(e) = send_class_reminders(db, events, now).await {
        tracing::error!("Error sending class reminders: {}", e);
    }

    Ok(())
}

/// Cancels pending bookings older than the hold window.
///
/// A pending booking holds a seat without confirmation; once the window
/// lapses the seat goes back to the pool and clients are notified.
async fn expire_pending_bookings(
    db: &DatabaseConnection,
    events: &EventBus,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let cutoff = now - chrono::Duration::minutes(BOOKING_HOLD_MINUTES);

    let repo = BookingRepository::new(db);
    let expired = repo.cancel_pending_before(cutoff).await?;

    for booking in expired {
        tracing::info!(
            "Cancelled expired booking {} for class {}",
            booking.id,
            booking.class_id
        );

        events.emit_lossy(BoardEvent::BookingCancelled {
            booking_id: booking.id,
            class_id: booking.class_id,
            reason: "hold expired".to_string(),
            timestamp: now,
        });
    }

    Ok(())
}

/// Broadcasts a one-time reminder for classes starting soon.
///
/// The `reminder_sent` flag is set before the event goes out, so a class
/// is reminded at most once even across restarts.
async fn send_class_reminders(
    db: &DatabaseConnection,
    events: &EventBus,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let window_end = now + chrono::Duration::minutes(REMINDER_LEAD_MINUTES);

    let repo = ClassRepository::new(db);
    let due = repo.due_for_reminder(now, window_end).await?;

    for class in due {
        tracing::info!("Sending reminder for class {} ({})", class.id, class.name);

        repo.mark_reminder_sent(class.id).await?;

        events.emit_lossy(BoardEvent::ClassReminder {
            class_id: class.id,
            name: class.name.clone(),
            starts_at: class.starts_at,
            timestamp: now,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::booking::BookingStatus;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn expires_stale_pending_bookings() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let events = EventBus::new(16);
        let mut rx = events.subscribe();

        let class = factory::class::create_class(db).await.unwrap();
        let now = Utc::now();

        let stale = factory::booking::BookingFactory::new(db, class.id)
            .created_at(now - Duration::minutes(BOOKING_HOLD_MINUTES + 5))
            .build()
            .await
            .unwrap();
        let fresh = factory::booking::create_booking(db, class.id).await.unwrap();

        expire_pending_bookings(db, &events, now).await.unwrap();

        let repo = BookingRepository::new(db);
        let stale_after = repo.get_by_id(stale.id).await.unwrap().unwrap();
        let fresh_after = repo.get_by_id(fresh.id).await.unwrap().unwrap();

        assert_eq!(stale_after.status, BookingStatus::Cancelled);
        assert_eq!(fresh_after.status, BookingStatus::Pending);

        match rx.try_recv().unwrap() {
            BoardEvent::BookingCancelled {
                booking_id, reason, ..
            } => {
                assert_eq!(booking_id, stale.id);
                assert_eq!(reason, "hold expired");
            }
            other => panic!("Unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn leaves_confirmed_bookings_alone() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let events = EventBus::new(16);

        let class = factory::class::create_class(db).await.unwrap();
        let now = Utc::now();

        let confirmed = factory::booking::BookingFactory::new(db, class.id)
            .status("confirmed")
            .created_at(now - Duration::hours(2))
            .build()
            .await
            .unwrap();

        expire_pending_bookings(db, &events, now).await.unwrap();

        let after = BookingRepository::new(db)
            .get_by_id(confirmed.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn reminds_classes_starting_soon_exactly_once() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let events = EventBus::new(16);
        let mut rx = events.subscribe();

        let now = Utc::now();
        let soon = factory::class::ClassFactory::new(db)
            .starts_at(now + Duration::minutes(30))
            .build()
            .await
            .unwrap();
        // Outside the reminder window
        factory::class::ClassFactory::new(db)
            .starts_at(now + Duration::hours(5))
            .build()
            .await
            .unwrap();

        send_class_reminders(db, &events, now).await.unwrap();

        match rx.try_recv().unwrap() {
            BoardEvent::ClassReminder { class_id, .. } => assert_eq!(class_id, soon.id),
            other => panic!("Unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());

        // Second tick must not re-send
        send_class_reminders(db, &events, now).await.unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn skips_classes_that_already_started() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let events = EventBus::new(16);
        let mut rx = events.subscribe();

        let now = Utc::now();
        factory::class::ClassFactory::new(db)
            .starts_at(now - Duration::minutes(5))
            .build()
            .await
            .unwrap();

        send_class_reminders(db, &events, now).await.unwrap();

        assert!(rx.try_recv().is_err());
    }
}
