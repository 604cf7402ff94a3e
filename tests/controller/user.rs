use festival::server::controller::user::{get_my_credits, get_my_pass};

use super::*;

/// Expect 404 when the user has never bought a pass
#[tokio::test]
async fn my_pass_not_found_without_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "asha@example.com", UserRole::User).await?;

    let state: AppState = test.to_app_state();
    let response = get_my_pass(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the user's pending pass to be returned
#[tokio::test]
async fn returns_my_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@reva.edu.in", UserRole::User).await?;
    test.pass()
        .insert_pass(user.id, PassType::Student, PassStatus::PendingVerification)
        .await?;

    let state: AppState = test.to_app_state();
    let response = get_my_pass(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "pending_verification");

    Ok(())
}

/// Expect the balance of unused credits
#[tokio::test]
async fn returns_credit_balance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 250, false).await?;
    test.credit().insert_credit(user.id, 250, true).await?;

    let state: AppState = test.to_app_state();
    let response = get_my_credits(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["balance"], 250);
    assert_eq!(body["credits"].as_array().map(Vec::len), Some(1));

    Ok(())
}
