use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{issue_token, AuthGuard, Claims},
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "test-secret";

/// Builds a test context with the user table.
async fn auth_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap()
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}
