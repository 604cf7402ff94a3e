//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use entity::sea_orm_active_enums::UserRole;
use festival::server::model::{db::UserModel, session::user::SessionUserId};
use festival_test_utils::prelude::*;

/// Inserts an account and stores its ID in the test session, as the auth provider would
pub async fn login(
    test: &TestContext,
    email: &str,
    role: UserRole,
) -> Result<UserModel, TestError> {
    let user = test.user().insert_user(email, role).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    Ok(user)
}

/// Reads a response body as JSON
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
