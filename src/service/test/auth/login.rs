use super::*;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::factory::user::UserFactory;

/// Tests a login with correct credentials.
///
/// Expected: the issued token verifies back to the same user
#[tokio::test]
async fn issues_verifiable_token() -> Result<(), AppError> {
    let test = auth_tables().await;
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .username("alice")
        .password("s3cret")
        .build()
        .await?;

    let token = AuthService::new(db, SECRET).login("alice", "s3cret").await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    let authenticated = AuthGuard::new(db, SECRET).require(&headers).await?;
    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests a login with the wrong password.
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = auth_tables().await;
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password("s3cret")
        .build()
        .await?;

    let result = AuthService::new(db, SECRET).login("alice", "wrong").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests a login for a username that does not exist.
///
/// Expected: the same error as a wrong password
#[tokio::test]
async fn rejects_unknown_username() {
    let test = auth_tables().await;
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db, SECRET).login("nobody", "s3cret").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}
