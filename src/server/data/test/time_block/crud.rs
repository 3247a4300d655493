use super::*;

/// Tests creating and listing time blocks.
///
/// Expected: blocks come back ordered by start time
#[tokio::test]
async fn creates_and_lists_blocks_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = TimeBlockRepository::new(db);

    let later = repo
        .create(CreateTimeBlockParams {
            starts_at: now + Duration::hours(4),
            ends_at: now + Duration::hours(5),
            reason: None,
        })
        .await?;
    let sooner = repo
        .create(CreateTimeBlockParams {
            starts_at: now + Duration::hours(1),
            ends_at: now + Duration::hours(2),
            reason: Some("Maintenance".to_string()),
        })
        .await?;

    let blocks = repo.get_all().await?;

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].id, sooner.id);
    assert_eq!(blocks[1].id, later.id);

    Ok(())
}

/// Tests deleting a block.
///
/// Expected: one row affected, then zero on repeat
#[tokio::test]
async fn deletes_block() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let block = factory::time_block::create_time_block(db).await?;

    let repo = TimeBlockRepository::new(db);

    assert_eq!(repo.delete(block.id).await?, 1);
    assert_eq!(repo.delete(block.id).await?, 0);

    Ok(())
}
