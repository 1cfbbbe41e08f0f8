use super::*;

/// Tests creating a user.
///
/// Expected: the stored row carries the hash, the returned model does not
/// expose it
#[tokio::test]
async fn creates_user_with_stored_hash() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(
            "alice".to_string(),
            "$argon2id$fakehash".to_string(),
            "alice@example.com".to_string(),
            "Admin".to_string(),
        )
        .await?;

    assert_eq!(user.username, "alice");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$fakehash");

    Ok(())
}

/// Tests listing users in id order.
#[tokio::test]
async fn lists_users_in_id_order() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);

    Ok(())
}
