use super::*;

/// Tests creating a news item with tags attached.
#[tokio::test]
async fn creates_news_with_tags() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let tag = factory::create_tag(db).await?;

    let news = NewsRepository::new(db)
        .create(sample_create(author.id, vec![tag.id]))
        .await?;

    assert_eq!(news.title, "Open day");
    assert_eq!(news.author_id, author.id);
    assert_eq!(news.tags.len(), 1);
    assert_eq!(news.tags[0].id, tag.id);

    Ok(())
}

/// Tests that a missing publication date falls back to the current time.
#[tokio::test]
async fn defaults_date_to_now() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let before = Utc::now();
    let news = NewsRepository::new(db)
        .create(sample_create(author.id, vec![]))
        .await?;
    let after = Utc::now();

    assert!(news.date >= before && news.date <= after);

    Ok(())
}
