use super::*;

/// Tests that duplicated ids collapse to a sorted set.
#[tokio::test]
async fn deduplicates_and_sorts_ids() -> Result<(), AppError> {
    let test = tag_tables().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    let resolved = TagService::new(db)
        .resolve(vec![second.id, first.id, second.id])
        .await?;

    assert_eq!(resolved, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty list resolves without touching the database.
#[tokio::test]
async fn accepts_empty_list() -> Result<(), AppError> {
    let test = tag_tables().await;
    let db = test.db.as_ref().unwrap();

    let resolved = TagService::new(db).resolve(vec![]).await?;

    assert!(resolved.is_empty());

    Ok(())
}

/// Tests that unknown ids are rejected and named in the error.
#[tokio::test]
async fn rejects_unknown_ids() -> Result<(), AppError> {
    let test = tag_tables().await;
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let result = TagService::new(db).resolve(vec![tag.id, 998, 999]).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Unknown tag ids: [998, 999]");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }

    Ok(())
}
