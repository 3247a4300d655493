use super::*;

/// Tests fetching an existing class by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn gets_existing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::class::create_class(db).await?;

    let repo = ClassRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, created.name);

    Ok(())
}

/// Tests fetching a missing class by ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let found = repo.get_by_id(999_999).await?;

    assert!(found.is_none());

    Ok(())
}
