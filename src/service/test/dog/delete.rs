use super::*;

/// Tests that deleting a dog removes its stored image file along with the
/// row.
#[tokio::test]
async fn removes_row_and_stored_image() -> Result<(), AppError> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let file = root.join("dogs").join("cover.jpg");
    tokio::fs::write(&file, b"jpeg bytes").await.unwrap();

    let dog = factory::dog::DogFactory::new(db)
        .image_url("/static/dogs/cover.jpg")
        .build()
        .await?;

    let service = DogService::new(db, &store);
    let deleted = service.delete(dog.id).await?;

    assert!(deleted);
    assert!(!tokio::fs::try_exists(&file).await.unwrap());
    assert!(service.find_by_id(dog.id).await?.is_none());

    Ok(())
}

/// Tests that a dog whose image file is already gone still deletes.
#[tokio::test]
async fn missing_image_file_does_not_fail_delete() -> Result<(), AppError> {
    let test = dog_tables().await;
    let db = test.db.as_ref().unwrap();
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let dog = factory::dog::DogFactory::new(db)
        .image_url("/static/dogs/absent.jpg")
        .build()
        .await?;

    let deleted = DogService::new(db, &store).delete(dog.id).await?;

    assert!(deleted);

    Ok(())
}
