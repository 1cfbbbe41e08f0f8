use super::*;

/// Tests deleting a user who authored news.
///
/// Expected: their news and those news' tag associations are removed in
/// the same transaction; other users' news survive
#[tokio::test]
async fn cascades_to_authored_news() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owned = factory::create_news(db, author.id).await?;
    let unrelated = factory::create_news(db, other.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::news::attach_tag(db, owned.id, tag.id).await?;

    let deleted = UserRepository::new(db).delete(author.id).await?;

    assert!(deleted);
    assert!(entity::prelude::User::find_by_id(author.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::News::find_by_id(owned.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::TagNews::find().all(db).await?.is_empty());
    assert!(entity::prelude::News::find_by_id(unrelated.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(123).await?;

    assert!(!deleted);

    Ok(())
}
