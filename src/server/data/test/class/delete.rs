use super::*;

/// Tests deleting an existing class.
///
/// Expected: one row affected and the class gone
#[tokio::test]
async fn deletes_existing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::class::create_class(db).await?;

    let repo = ClassRepository::new(db);
    let rows_affected = repo.delete(created.id).await?;

    assert_eq!(rows_affected, 1);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing class.
///
/// Expected: zero rows affected
#[tokio::test]
async fn deleting_missing_class_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let rows_affected = repo.delete(999_999).await?;

    assert_eq!(rows_affected, 0);

    Ok(())
}
