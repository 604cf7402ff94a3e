use festival::server::{
    controller::auth::{get_user, logout},
    model::session::user::SessionUserId,
};

use super::*;

/// Expect 200 with the account of the logged in user
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::Volunteer).await?;

    let state: AppState = test.to_app_state();
    let response = get_user(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "asha@example.com");
    assert_eq!(body["role"], "volunteer");

    Ok(())
}

/// Expect 401 with an unauthorized code without a session
#[tokio::test]
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;

    let state: AppState = test.to_app_state();
    let response = get_user(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["code"], "unauthorized");

    Ok(())
}

/// Expect logout to clear the user from the session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "asha@example.com", UserRole::User).await?;

    let response = logout(test.session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

    Ok(())
}
