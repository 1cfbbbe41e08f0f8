use super::*;

/// Tests that deleting a news item removes its stored image file along
/// with the row.
#[tokio::test]
async fn removes_row_and_stored_image() -> Result<(), AppError> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let file = root.join("news").join("cover.jpg");
    tokio::fs::write(&file, b"jpeg bytes").await.unwrap();

    let author = factory::create_user(db).await?;
    let news = factory::news::NewsFactory::new(db, author.id)
        .image_url("/static/news/cover.jpg")
        .build()
        .await?;

    let service = NewsService::new(db, &store);
    let deleted = service.delete(news.id).await?;

    assert!(deleted);
    assert!(!tokio::fs::try_exists(&file).await.unwrap());
    assert!(service.find_by_id(news.id).await?.is_none());

    Ok(())
}
