use super::*;

/// Tests updating an existing class.
///
/// Verifies that all mutable fields are replaced and the reminder flag is
/// left untouched.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_existing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::class::create_class(db).await?;
    let new_start = Utc::now() + Duration::hours(6);

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateClassParams {
                name: "Renamed".to_string(),
                instructor: "Grace".to_string(),
                description: None,
                starts_at: new_start,
                duration_minutes: 45,
                capacity: 4,
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.instructor, "Grace");
    assert!(updated.description.is_none());
    assert_eq!(updated.starts_at, new_start);
    assert_eq!(updated.duration_minutes, 45);
    assert_eq!(updated.capacity, 4);
    assert!(!updated.reminder_sent);

    Ok(())
}

/// Tests updating a missing class.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            999_999,
            UpdateClassParams {
                name: "Renamed".to_string(),
                instructor: "Grace".to_string(),
                description: None,
                starts_at: Utc::now() + Duration::hours(1),
                duration_minutes: 45,
                capacity: 4,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
