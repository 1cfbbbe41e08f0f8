use super::*;

/// Tests a full update replacing the tag set.
///
/// Expected: old junction rows gone, new tag resolved
#[tokio::test]
async fn replaces_fields_and_tag_set() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let dog = factory::create_dog(db).await?;
    let old_tag = factory::create_tag(db).await?;
    let new_tag = factory::create_tag(db).await?;
    factory::dog::attach_tag(db, dog.id, old_tag.id).await?;

    let updated = DogRepository::new(db)
        .update(sample_update(dog.id, vec![new_tag.id]))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Bella");
    assert_eq!(updated.gender, Gender::Female);
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].id, new_tag.id);

    let junctions = entity::prelude::TagDog::find().all(db).await?;
    assert_eq!(junctions.len(), 1);
    assert_eq!(junctions[0].tag_id, new_tag.id);

    Ok(())
}

/// Tests that an update without a new image keeps the stored one.
#[tokio::test]
async fn keeps_image_url_when_absent() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let dog = test_utils::factory::dog::DogFactory::new(db)
        .image_url("/static/dogs/existing.jpg")
        .build()
        .await?;

    let updated = DogRepository::new(db)
        .update(sample_update(dog.id, vec![]))
        .await?
        .unwrap();

    assert_eq!(
        updated.image_url.as_deref(),
        Some("/static/dogs/existing.jpg")
    );

    Ok(())
}

/// Tests updating a nonexistent dog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dog() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = DogRepository::new(db)
        .update(sample_update(123, vec![]))
        .await?;

    assert!(result.is_none());

    Ok(())
}
