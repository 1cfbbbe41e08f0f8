use super::*;

/// Tests a patch naming a single field.
///
/// Expected: other fields and the tag set untouched
#[tokio::test]
async fn patches_single_field() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let news = factory::create_news(db, author.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::news::attach_tag(db, news.id, tag.id).await?;

    let patched = NewsRepository::new(db)
        .patch(PatchNewsParams {
            id: news.id,
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(patched.title, "Renamed");
    assert_eq!(patched.body, news.body);
    assert_eq!(patched.tags.len(), 1);

    Ok(())
}

/// Tests that an empty tag id list clears all associations.
#[tokio::test]
async fn empty_tag_list_clears_associations() -> Result<(), DbErr> {
    let test = news_tables().await;
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let news = factory::create_news(db, author.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::news::attach_tag(db, news.id, tag.id).await?;

    let patched = NewsRepository::new(db)
        .patch(PatchNewsParams {
            id: news.id,
            tag_ids: Some(vec![]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(patched.tags.is_empty());
    assert!(entity::prelude::TagNews::find().all(db).await?.is_empty());

    Ok(())
}
