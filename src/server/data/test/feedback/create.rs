use super::*;

/// Tests creating a feedback entry.
///
/// Expected: Ok with stored fields
#[tokio::test]
async fn creates_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;

    let repo = FeedbackRepository::new(db);
    let result = repo
        .create(CreateFeedbackParams {
            class_id: class.id,
            author_name: "Grace".to_string(),
            rating: 4,
            comment: Some("Great pacing".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let feedback = result.unwrap();
    assert_eq!(feedback.class_id, class.id);
    assert_eq!(feedback.author_name, "Grace");
    assert_eq!(feedback.rating, 4);
    assert_eq!(feedback.comment, Some("Great pacing".to_string()));

    Ok(())
}

/// Tests foreign key constraint on class_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo
        .create(CreateFeedbackParams {
            class_id: 999_999, // Non-existent class
            author_name: "Grace".to_string(),
            rating: 4,
            comment: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
