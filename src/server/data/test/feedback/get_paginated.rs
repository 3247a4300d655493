use super::*;

/// Tests the class filter on the paginated listing.
///
/// Expected: only the requested class's feedback with correct totals
#[tokio::test]
async fn filters_by_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_a = factory::class::create_class(db).await?;
    let class_b = factory::class::create_class(db).await?;
    factory::feedback::create_feedback(db, class_a.id).await?;
    factory::feedback::create_feedback(db, class_b.id).await?;
    factory::feedback::create_feedback(db, class_b.id).await?;

    let repo = FeedbackRepository::new(db);
    let (feedback, total, total_pages) = repo.get_paginated(Some(class_b.id), 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(total_pages, 1);
    assert!(feedback.iter().all(|f| f.class_id == class_b.id));

    Ok(())
}

/// Tests the unfiltered listing.
///
/// Expected: everything, with totals across classes
#[tokio::test]
async fn lists_all_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    factory::feedback::create_feedback(db, class.id).await?;
    factory::feedback::create_feedback(db, class.id).await?;

    let repo = FeedbackRepository::new(db);
    let (feedback, total, _) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(feedback.len(), 2);

    Ok(())
}
