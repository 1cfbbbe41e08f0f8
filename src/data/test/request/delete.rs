use super::*;

use sea_orm::EntityTrait;

/// Tests deleting an adoption request.
///
/// Expected: request row and its detail row both removed
#[tokio::test]
async fn removes_request_and_detail_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let deleted = RequestRepository::new(db).delete(created.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Request::find_by_id(created.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::AdoptionRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting a nonexistent request.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_request() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let deleted = RequestRepository::new(db).delete(123).await?;

    assert!(!deleted);

    Ok(())
}
