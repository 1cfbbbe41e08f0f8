use super::*;

/// Tests looking up a subset of tags by id.
#[tokio::test]
async fn finds_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let found = repo.find_by_ids(&[first.id, second.id, 999]).await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, first.id);
    assert_eq!(found[1].id, second.id);

    Ok(())
}

/// Tests that an empty id list short-circuits to an empty result.
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = TagRepository::new(db).find_by_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
