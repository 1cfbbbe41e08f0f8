use super::*;

/// Tests a patch naming a single field.
///
/// Expected: other fields and the tag set untouched
#[tokio::test]
async fn patches_single_field() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let dog = factory::create_dog(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::dog::attach_tag(db, dog.id, tag.id).await?;

    let patched = DogRepository::new(db)
        .patch(PatchDogParams {
            id: dog.id,
            age: Some(7),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(patched.age, 7);
    assert_eq!(patched.name, dog.name);
    assert_eq!(patched.tags.len(), 1);

    Ok(())
}

/// Tests that an empty tag id list clears all associations.
#[tokio::test]
async fn empty_tag_list_clears_associations() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let dog = factory::create_dog(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::dog::attach_tag(db, dog.id, tag.id).await?;

    let patched = DogRepository::new(db)
        .patch(PatchDogParams {
            id: dog.id,
            tag_ids: Some(vec![]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(patched.tags.is_empty());
    assert!(entity::prelude::TagDog::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests patching a nonexistent dog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dog() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = DogRepository::new(db)
        .patch(PatchDogParams {
            id: 123,
            age: Some(1),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
