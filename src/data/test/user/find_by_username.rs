use super::*;

/// Tests looking up a user by username.
#[tokio::test]
async fn finds_user_by_exact_username() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::UserFactory::new(db)
        .username("shelter-admin")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username("shelter-admin")
        .await?
        .unwrap();

    assert_eq!(found.id, user.id);

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db).find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
