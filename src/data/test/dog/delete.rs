use super::*;

/// Tests deleting a dog with tag associations.
///
/// Expected: dog and junction rows removed, tag rows survive, the deleted
/// dog is returned for image cleanup
#[tokio::test]
async fn removes_dog_and_associations() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let dog = factory::create_dog(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::dog::attach_tag(db, dog.id, tag.id).await?;

    let deleted = DogRepository::new(db).delete(dog.id).await?.unwrap();

    assert_eq!(deleted.id, dog.id);
    assert!(entity::prelude::Dog::find_by_id(dog.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::TagDog::find().all(db).await?.is_empty());
    assert!(entity::prelude::Tag::find_by_id(tag.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent dog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dog() -> Result<(), DbErr> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = DogRepository::new(db).delete(123).await?;

    assert!(result.is_none());

    Ok(())
}
