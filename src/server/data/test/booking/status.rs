use super::*;

/// Tests the status transition write.
///
/// Verifies that the status changes and the update timestamp advances.
///
/// Expected: Ok(Some) with new status
#[tokio::test]
async fn sets_status_and_bumps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    let booking = factory::booking::BookingFactory::new(db, class.id)
        .created_at(Utc::now() - Duration::minutes(10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking.id, BookingStatus::Confirmed).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert!(updated.updated_at > booking.updated_at);

    Ok(())
}

/// Tests the status transition for a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(999_999, BookingStatus::Confirmed).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests the held-seat count.
///
/// Pending and confirmed bookings hold seats; cancelled ones do not.
///
/// Expected: count of 2
#[tokio::test]
async fn counts_pending_and_confirmed_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    factory::booking::create_booking(db, class.id).await?;
    factory::booking::BookingFactory::new(db, class.id)
        .status("confirmed")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, class.id)
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let held = repo.count_active_for_class(class.id).await?;

    assert_eq!(held, 2);

    Ok(())
}
