use super::*;

/// Tests pagination ordering and totals.
///
/// Verifies that classes come back ordered by start time ascending and
/// that the item and page totals reflect the full result set.
///
/// Expected: ordered pages with correct totals
#[tokio::test]
async fn paginates_in_start_time_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::hours(3))
        .build()
        .await?;
    let sooner = factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::hours(1))
        .build()
        .await?;
    let middle = factory::class::ClassFactory::new(db)
        .starts_at(now + Duration::hours(2))
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let (page, total, total_pages) = repo.get_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, sooner.id);
    assert_eq!(page[1].id, middle.id);

    let (page, _, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, later.id);

    Ok(())
}

/// Tests pagination over an empty table.
///
/// Expected: empty page with zero totals
#[tokio::test]
async fn empty_table_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let (page, total, total_pages) = repo.get_paginated(0, 10).await?;

    assert!(page.is_empty());
    assert_eq!(total, 0);
    assert_eq!(total_pages, 0);

    Ok(())
}
