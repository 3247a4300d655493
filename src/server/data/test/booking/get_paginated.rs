use super::*;

/// Tests the class filter on the paginated listing.
///
/// Expected: only the requested class's bookings
#[tokio::test]
async fn filters_by_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_a = factory::class::create_class(db).await?;
    let class_b = factory::class::create_class(db).await?;
    factory::booking::create_booking(db, class_a.id).await?;
    factory::booking::create_booking(db, class_a.id).await?;
    factory::booking::create_booking(db, class_b.id).await?;

    let repo = BookingRepository::new(db);
    let (bookings, total, _) = repo.get_paginated(Some(class_a.id), 0, 10).await?;

    assert_eq!(total, 2);
    assert!(bookings.iter().all(|b| b.class_id == class_a.id));

    Ok(())
}

/// Tests the unfiltered paginated listing ordering.
///
/// Expected: newest bookings first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    let now = Utc::now();

    let older = factory::booking::BookingFactory::new(db, class.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::booking::BookingFactory::new(db, class.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let (bookings, total, total_pages) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(total_pages, 1);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older.id);

    Ok(())
}
