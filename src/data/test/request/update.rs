use super::*;

use sea_orm::EntityTrait;

fn sample_update(id: i32, details: RequestDetails) -> UpdateRequestParams {
    UpdateRequestParams {
        id,
        dog_id: 2,
        full_name: "Casey Jones".to_string(),
        phone: "+15550002".to_string(),
        email: "casey@example.com".to_string(),
        status: RequestStatus::InProgress,
        details,
    }
}

/// Tests a full update that keeps the request an adoption request.
///
/// Expected: detail row updated in place, no extra rows
#[tokio::test]
async fn rewrites_adoption_details_in_place() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let repo = RequestRepository::new(db);
    let mut details = sample_adoption_details();
    details.housing_type = HousingType::Apartment;
    let updated = repo
        .update(sample_update(
            created.id,
            RequestDetails::Adoption(details),
        ))
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Casey Jones");
    assert_eq!(updated.details, RequestDetails::Adoption(details));

    let adoptions = entity::prelude::AdoptionRequest::find().all(db).await?;
    assert_eq!(adoptions.len(), 1);
    assert_eq!(adoptions[0].housing_type, HousingType::Apartment);

    Ok(())
}

/// Tests retyping an adoption request to guardianship via full update.
///
/// Expected: adoption row discarded, guardian marker row inserted
#[tokio::test]
async fn retype_discards_stale_detail_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let updated = RequestRepository::new(db)
        .update(sample_update(created.id, RequestDetails::Guardian))
        .await?
        .unwrap();

    assert_eq!(updated.details, RequestDetails::Guardian);
    assert!(entity::prelude::AdoptionRequest::find()
        .all(db)
        .await?
        .is_empty());
    assert_eq!(
        entity::prelude::GuardianRequest::find().all(db).await?.len(),
        1
    );

    Ok(())
}

/// Tests that completing a request stamps closed_at and reopening clears
/// it.
#[tokio::test]
async fn closed_at_follows_status_transitions() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_guardian()
        .await?;

    let repo = RequestRepository::new(db);

    let mut params = sample_update(created.id, RequestDetails::Guardian);
    params.status = RequestStatus::Completed;
    let completed = repo.update(params).await?.unwrap();
    assert!(completed.closed_at.is_some());

    let mut params = sample_update(created.id, RequestDetails::Guardian);
    params.status = RequestStatus::New;
    let reopened = repo.update(params).await?.unwrap();
    assert!(reopened.closed_at.is_none());

    Ok(())
}

/// Tests updating a nonexistent request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = RequestRepository::new(db)
        .update(sample_update(123, RequestDetails::Guardian))
        .await?;

    assert!(result.is_none());

    Ok(())
}
