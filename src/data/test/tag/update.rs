use super::*;

/// Tests renaming an existing tag.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn renames_existing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let updated = repo
        .update(
            tag.id,
            UpsertTagParams {
                name: "renamed".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.unwrap().name, "renamed");
    assert_eq!(repo.find_by_id(tag.id).await?.unwrap().name, "renamed");

    Ok(())
}

/// Tests updating a nonexistent tag.
///
/// Expected: Ok(None), nothing created
#[tokio::test]
async fn returns_none_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let result = repo
        .update(
            999,
            UpsertTagParams {
                name: "ghost".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
