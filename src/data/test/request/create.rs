use super::*;

use sea_orm::EntityTrait;

/// Tests creating an adoption request.
///
/// Expected: request row plus exactly one adoption detail row, no guardian
/// row
#[tokio::test]
async fn creates_adoption_request_with_detail_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let request = repo
        .create(sample_create(RequestDetails::Adoption(
            sample_adoption_details(),
        )))
        .await?;

    assert_eq!(request.details.request_type(), RequestType::AdoptionRequest);
    assert_eq!(request.status, RequestStatus::New);
    assert!(request.closed_at.is_none());

    let adoptions = entity::prelude::AdoptionRequest::find().all(db).await?;
    assert_eq!(adoptions.len(), 1);
    assert_eq!(adoptions[0].request_id, request.id);
    assert!(entity::prelude::GuardianRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests creating a guardianship request.
///
/// Expected: request row plus the guardian marker row, no adoption row
#[tokio::test]
async fn creates_guardian_request_with_marker_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let request = repo.create(sample_create(RequestDetails::Guardian)).await?;

    assert_eq!(request.details, RequestDetails::Guardian);

    let guardians = entity::prelude::GuardianRequest::find().all(db).await?;
    assert_eq!(guardians.len(), 1);
    assert_eq!(guardians[0].request_id, request.id);
    assert!(entity::prelude::AdoptionRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests creating a request directly in the completed status.
///
/// Expected: closed_at stamped at creation
#[tokio::test]
async fn stamps_closed_at_for_completed_creation() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let mut params = sample_create(RequestDetails::Guardian);
    params.status = RequestStatus::Completed;

    let request = RequestRepository::new(db).create(params).await?;

    assert!(request.closed_at.is_some());

    Ok(())
}
