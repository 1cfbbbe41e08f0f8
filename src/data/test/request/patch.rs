use super::*;

use sea_orm::EntityTrait;

/// Tests a status-only patch.
///
/// Expected: type and detail row untouched
#[tokio::test]
async fn status_patch_leaves_details_alone() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, detail) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let patched = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: created.id,
            status: Some(RequestStatus::InProgress),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(patched.status, RequestStatus::InProgress);
    assert_eq!(patched.full_name, created.full_name);

    let adoptions = entity::prelude::AdoptionRequest::find().all(db).await?;
    assert_eq!(adoptions.len(), 1);
    assert_eq!(adoptions[0].housing_type, detail.housing_type);

    Ok(())
}

/// Tests merging a partial adoption detail patch into an existing row.
///
/// Expected: named fields replaced, the rest preserved
#[tokio::test]
async fn merges_adoption_detail_fields() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, detail) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let patched = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: created.id,
            adoption_details: Some(AdoptionDetailsPatch {
                housing_type: Some(HousingType::House),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await?
        .unwrap();

    match patched.details {
        RequestDetails::Adoption(details) => {
            assert_eq!(details.housing_type, HousingType::House);
            assert_eq!(details.family_member_count, detail.family_member_count);
            assert_eq!(details.adoption_purpose, detail.adoption_purpose);
        }
        RequestDetails::Guardian => panic!("expected adoption details"),
    }

    Ok(())
}

/// Tests retyping to adoption without a complete detail set.
///
/// Expected: BadRequest, nothing written
#[tokio::test]
async fn rejects_retype_without_complete_details() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_guardian()
        .await?;

    let result = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: created.id,
            r#type: Some(RequestType::AdoptionRequest),
            adoption_details: Some(AdoptionDetailsPatch {
                housing_type: Some(HousingType::House),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        entity::prelude::GuardianRequest::find().all(db).await?.len(),
        1
    );
    assert!(entity::prelude::AdoptionRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests retyping a guardianship request to adoption with a full detail
/// set in the patch.
#[tokio::test]
async fn retypes_to_adoption_with_complete_details() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_guardian()
        .await?;

    let details = sample_adoption_details();
    let patched = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: created.id,
            r#type: Some(RequestType::AdoptionRequest),
            adoption_details: Some(AdoptionDetailsPatch {
                family_member_count: Some(details.family_member_count),
                had_experience_adoption_pet: Some(details.had_experience_adoption_pet),
                adoption_purpose: Some(details.adoption_purpose),
                housing_type: Some(details.housing_type),
                housing_area: Some(details.housing_area),
            }),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(patched.details, RequestDetails::Adoption(details));
    assert!(entity::prelude::GuardianRequest::find()
        .all(db)
        .await?
        .is_empty());
    assert_eq!(
        entity::prelude::AdoptionRequest::find().all(db).await?.len(),
        1
    );

    Ok(())
}

/// Tests retyping an adoption request to guardianship.
///
/// Expected: adoption row dropped, patch detail fields ignored
#[tokio::test]
async fn retypes_to_guardian_and_drops_adoption_row() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;

    let patched = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: created.id,
            r#type: Some(RequestType::GuardianRequest),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(patched.details, RequestDetails::Guardian);
    assert!(entity::prelude::AdoptionRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests patching a nonexistent request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = RequestRepository::new(db)
        .patch(PatchRequestParams {
            id: 123,
            status: Some(RequestStatus::InProgress),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
