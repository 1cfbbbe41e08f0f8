use super::*;

use sea_orm::EntityTrait;

/// Tests that deleting a tag removes its junction rows while the tagged
/// dog survives.
#[tokio::test]
async fn removes_tag_and_associations_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::Dog)
        .with_table(entity::prelude::News)
        .with_table(entity::prelude::TagDog)
        .with_table(entity::prelude::TagNews)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;
    let dog = factory::create_dog(db).await?;
    let author = factory::create_user(db).await?;
    let news = factory::create_news(db, author.id).await?;
    factory::dog::attach_tag(db, dog.id, tag.id).await?;
    factory::news::attach_tag(db, news.id, tag.id).await?;

    let repo = TagRepository::new(db);
    let deleted = repo.delete(tag.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(tag.id).await?.is_none());
    assert!(entity::prelude::TagDog::find().all(db).await?.is_empty());
    assert!(entity::prelude::TagNews::find().all(db).await?.is_empty());
    assert!(entity::prelude::Dog::find_by_id(dog.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::News::find_by_id(news.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent tag.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::Dog)
        .with_table(entity::prelude::News)
        .with_table(entity::prelude::TagDog)
        .with_table(entity::prelude::TagNews)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = TagRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
