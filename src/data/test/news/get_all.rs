use super::*;

/// Tests that listing returns news newest first.
#[tokio::test]
async fn lists_news_newest_first() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let older = factory::news::NewsFactory::new(db, author.id)
        .date(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::news::NewsFactory::new(db, author.id)
        .date(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let list = NewsRepository::new(db).get_all().await?;

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, newer.id);
    assert_eq!(list[1].id, older.id);

    Ok(())
}

/// Tests listing with no news stored.
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let list = NewsRepository::new(db).get_all().await?;

    assert!(list.is_empty());

    Ok(())
}
