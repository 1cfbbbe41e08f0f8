use super::*;

/// Tests deleting a news item with tag associations.
///
/// Expected: news and junction rows removed, the deleted item returned for
/// image cleanup
#[tokio::test]
async fn removes_news_and_associations() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let news = factory::create_news(db, author.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::news::attach_tag(db, news.id, tag.id).await?;

    let deleted = NewsRepository::new(db).delete(news.id).await?.unwrap();

    assert_eq!(deleted.id, news.id);
    assert!(entity::prelude::News::find_by_id(news.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::TagNews::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a nonexistent news item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_news() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = NewsRepository::new(db).delete(123).await?;

    assert!(result.is_none());

    Ok(())
}
