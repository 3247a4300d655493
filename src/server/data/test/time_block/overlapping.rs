use super::*;

/// Tests the overlap query against a stored block.
///
/// Intervals crossing the block match; disjoint intervals and intervals
/// that merely touch an endpoint do not.
///
/// Expected: overlap only for genuinely intersecting intervals
#[tokio::test]
async fn detects_overlap_with_half_open_semantics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let block_start = now + Duration::hours(2);
    let block_end = now + Duration::hours(3);

    factory::time_block::TimeBlockFactory::new(db)
        .starts_at(block_start)
        .ends_at(block_end)
        .build()
        .await?;

    let repo = TimeBlockRepository::new(db);

    // Crossing the block start
    let hits = repo
        .overlapping(block_start - Duration::minutes(30), block_start + Duration::minutes(30))
        .await?;
    assert_eq!(hits.len(), 1);

    // Fully inside the block
    let hits = repo
        .overlapping(block_start + Duration::minutes(10), block_end - Duration::minutes(10))
        .await?;
    assert_eq!(hits.len(), 1);

    // Fully containing the block
    let hits = repo
        .overlapping(block_start - Duration::hours(1), block_end + Duration::hours(1))
        .await?;
    assert_eq!(hits.len(), 1);

    // Before the block
    let hits = repo
        .overlapping(now, now + Duration::hours(1))
        .await?;
    assert!(hits.is_empty());

    // Touching the block end exactly
    let hits = repo
        .overlapping(block_end, block_end + Duration::hours(1))
        .await?;
    assert!(hits.is_empty());

    // Touching the block start exactly
    let hits = repo
        .overlapping(block_start - Duration::hours(1), block_start)
        .await?;
    assert!(hits.is_empty());

    Ok(())
}
