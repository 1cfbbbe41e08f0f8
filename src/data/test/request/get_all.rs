use super::*;

/// Tests listing a mix of adoption and guardianship requests.
///
/// Expected: ordered by id, each carrying the detail variant matching its
/// type
#[tokio::test]
async fn lists_requests_with_matching_details() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let (adoption, _) = factory::request::RequestFactory::new(db)
        .build_adoption()
        .await?;
    let (guardian, _) = factory::request::RequestFactory::new(db)
        .build_guardian()
        .await?;

    let requests = RequestRepository::new(db).get_all().await?;

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, adoption.id);
    assert!(matches!(requests[0].details, RequestDetails::Adoption(_)));
    assert_eq!(requests[1].id, guardian.id);
    assert_eq!(requests[1].details, RequestDetails::Guardian);

    Ok(())
}

/// Tests listing with no requests stored.
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = request_tables().await;
    let db = test.db.as_ref().unwrap();

    let requests = RequestRepository::new(db).get_all().await?;

    assert!(requests.is_empty());

    Ok(())
}
