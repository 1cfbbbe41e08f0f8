use super::*;

/// Tests fetching an adoption request by id.
///
/// Expected: Ok(Some) with the adoption detail loaded
#[tokio::test]
async fn finds_request_with_detail() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, detail) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let request = RequestRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(request.id, created.id);
    match request.details {
        RequestDetails::Adoption(details) => {
            assert_eq!(details.family_member_count, detail.family_member_count);
        }
        RequestDetails::Guardian => panic!("expected adoption details"),
    }

    Ok(())
}

/// Tests fetching a nonexistent request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = RequestRepository::new(db).find_by_id(123).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a request whose detail row is missing surfaces as an
/// internal error instead of a fabricated detail.
#[tokio::test]
async fn rejects_request_with_missing_detail_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, detail) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    use sea_orm::{EntityTrait, ModelTrait};
    detail.delete(db).await?;
    assert!(entity::prelude::Request::find_by_id(created.id)
        .one(db)
        .await?
        .is_some());

    let result = RequestRepository::new(db).find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
