use super::*;

/// Tests the reminder-window query.
///
/// Only classes that start inside the window and have not been reminded
/// should come back; started classes and far-future classes are excluded.
///
/// Expected: exactly the in-window class
#[tokio::test]
async fn finds_classes_due_for_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let in_window = factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::minutes(30))
        .build()
        .await?;
    // Already started
    factory::class::ClassFactory::new(db)
        .starts_at(now - Duration::minutes(10))
        .build()
        .await?;
    // Too far out
    factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::hours(5))
        .build()
        .await?;
    // Already reminded
    factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::minutes(45))
        .reminder_sent(true)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let due = repo
        .due_for_reminder(now, now + Duration::hours(1))
        .await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, in_window.id);

    Ok(())
}

/// Tests the reminder flag write.
///
/// Expected: flag set and the class no longer due
#[tokio::test]
async fn mark_reminder_sent_removes_class_from_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let class = factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::minutes(30))
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    repo.mark_reminder_sent(class.id).await?;

    let due = repo
        .due_for_reminder(now, now + Duration::hours(1))
        .await?;

    assert!(due.is_empty());
    assert!(repo.get_by_id(class.id).await?.unwrap().reminder_sent);

    Ok(())
}

/// Tests marking a missing class.
///
/// Expected: Ok, nothing to do
#[tokio::test]
async fn marking_missing_class_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    repo.mark_reminder_sent(999_999).await?;

    Ok(())
}
