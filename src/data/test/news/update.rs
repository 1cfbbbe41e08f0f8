use super::*;

/// Tests a full update replacing fields and the tag set.
///
/// Expected: author untouched
#[tokio::test]
async fn replaces_fields_but_keeps_author() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let news = factory::create_news(db, author.id).await?;
    let tag = factory::create_tag(db).await?;

    let date = Utc::now() - Duration::days(3);
    let updated = NewsRepository::new(db)
        .update(UpdateNewsParams {
            id: news.id,
            title: "Adoption fair".to_string(),
            date,
            body: "New body".to_string(),
            preview: Some("Short preview".to_string()),
            tag_ids: vec![tag.id],
            image_url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Adoption fair");
    assert_eq!(updated.date, date);
    assert_eq!(updated.author_id, author.id);
    assert_eq!(updated.tags.len(), 1);

    Ok(())
}

/// Tests updating a nonexistent news item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_news() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = NewsRepository::new(db)
        .update(UpdateNewsParams {
            id: 123,
            title: "Nope".to_string(),
            date: Utc::now(),
            body: "Nope".to_string(),
            preview: None,
            tag_ids: vec![],
            image_url: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
