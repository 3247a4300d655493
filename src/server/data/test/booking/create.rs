use super::*;

/// Tests creating a new booking.
///
/// Verifies that the repository creates a pending booking with matching
/// customer fields and timestamps.
///
/// Expected: Ok with pending booking
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            class_id: class.id,
            customer_name: "Grace".to_string(),
            customer_email: "grace@example.com".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let booking = result.unwrap();
    assert_eq!(booking.class_id, class.id);
    assert_eq!(booking.customer_name, "Grace");
    assert_eq!(booking.customer_email, "grace@example.com");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.created_at, booking.updated_at);

    Ok(())
}

/// Tests foreign key constraint on class_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            class_id: 999_999, // Non-existent class
            customer_name: "Grace".to_string(),
            customer_email: "grace@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
