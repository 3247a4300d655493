use super::*;

/// Tests the bulk hold-expiry operation.
///
/// Only pending bookings created before the cutoff are cancelled; fresh
/// pending bookings and settled bookings are untouched.
///
/// Expected: exactly the stale pending booking cancelled
#[tokio::test]
async fn cancels_only_stale_pending_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    let now = Utc::now();

    let stale_pending = factory::booking::BookingFactory::new(db, class.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let fresh_pending = factory::booking::create_booking(db, class.id).await?;
    let stale_confirmed = factory::booking::BookingFactory::new(db, class.id)
        .status("confirmed")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo
        .cancel_pending_before(now - Duration::minutes(30))
        .await?;

    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, stale_pending.id);
    assert_eq!(cancelled[0].status, BookingStatus::Cancelled);

    let fresh = repo.get_by_id(fresh_pending.id).await?.unwrap();
    assert_eq!(fresh.status, BookingStatus::Pending);

    let confirmed = repo.get_by_id(stale_confirmed.id).await?.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests expiry over an empty table.
///
/// Expected: Ok with nothing cancelled
#[tokio::test]
async fn expiry_with_no_bookings_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel_pending_before(Utc::now()).await?;

    assert!(cancelled.is_empty());

    Ok(())
}
