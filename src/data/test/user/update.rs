use super::*;

/// Tests an update without a new password.
///
/// Expected: the stored hash is untouched
#[tokio::test]
async fn keeps_hash_when_password_absent() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            "renamed".to_string(),
            None,
            "renamed@example.com".to_string(),
            "Admin".to_string(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, user.password);

    Ok(())
}

/// Tests that a provided hash replaces the stored one.
#[tokio::test]
async fn replaces_hash_when_password_present() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserRepository::new(db)
        .update(
            user.id,
            user.username.clone(),
            Some("$argon2id$newhash".to_string()),
            user.email.clone(),
            user.role.clone(),
        )
        .await?
        .unwrap();

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$newhash");

    Ok(())
}

/// Tests updating a nonexistent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            123,
            "ghost".to_string(),
            None,
            "ghost@example.com".to_string(),
            "Admin".to_string(),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
