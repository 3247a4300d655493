use super::*;

/// Tests creating a new class.
///
/// Verifies that the repository successfully creates a class record with
/// the specified fields and a cleared reminder flag.
///
/// Expected: Ok with class created
#[tokio::test]
async fn creates_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starts_at = Utc::now() + Duration::hours(2);
    let repo = ClassRepository::new(db);
    let result = repo.create(create_params(starts_at)).await;

    assert!(result.is_ok());
    let class = result.unwrap();
    assert_eq!(class.name, "Test Class");
    assert_eq!(class.instructor, "Ada");
    assert_eq!(class.starts_at, starts_at);
    assert_eq!(class.duration_minutes, 60);
    assert_eq!(class.capacity, 10);
    assert!(!class.reminder_sent);

    Ok(())
}

/// Tests creating a class with no description.
///
/// Expected: Ok with class created with None description
#[tokio::test]
async fn creates_class_with_none_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = create_params(Utc::now() + Duration::hours(2));
    params.description = None;

    let repo = ClassRepository::new(db);
    let class = repo.create(params).await?;

    assert!(class.description.is_none());

    Ok(())
}

/// Tests the derived end time.
///
/// Expected: ends_at is starts_at plus the duration
#[tokio::test]
async fn derives_end_time_from_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starts_at = Utc::now() + Duration::hours(2);
    let repo = ClassRepository::new(db);
    let class = repo.create(create_params(starts_at)).await?;

    assert_eq!(class.ends_at(), starts_at + Duration::minutes(60));

    Ok(())
}
