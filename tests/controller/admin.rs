use festival::{
    model::pass::VerifyPassDto,
    server::controller::admin::{get_finance_summary, list_pending_passes, verify_pass},
};

use super::*;

/// Expect an admin to list and approve a pending student pass
#[tokio::test]
async fn admin_approves_pending_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let student = test
        .user()
        .insert_user("asha@reva.edu.in", UserRole::User)
        .await?;
    let pass = test
        .pass()
        .insert_pass(student.id, PassType::Student, PassStatus::PendingVerification)
        .await?;
    login(&test, "admin@example.com", UserRole::Admin).await?;

    let state: AppState = test.to_app_state();
    let pending = list_pending_passes(State(state.clone()), test.session.clone())
        .await
        .into_response();
    assert_eq!(pending.status(), StatusCode::OK);
    assert_eq!(json_body(pending).await[0]["id"], pass.id);

    let response = verify_pass(
        State(state),
        test.session.clone(),
        Path(pass.id),
        ApiJson(VerifyPassDto { approve: true }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "active");

    Ok(())
}

/// Expect 403 when a volunteer attempts to verify a pass
#[tokio::test]
async fn volunteer_cannot_verify() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let student = test
        .user()
        .insert_user("asha@reva.edu.in", UserRole::User)
        .await?;
    let pass = test
        .pass()
        .insert_pass(student.id, PassType::Student, PassStatus::PendingVerification)
        .await?;
    login(&test, "vol@example.com", UserRole::Volunteer).await?;

    let state: AppState = test.to_app_state();
    let response = verify_pass(
        State(state),
        test.session.clone(),
        Path(pass.id),
        ApiJson(VerifyPassDto { approve: true }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the financial summary for admins only
#[tokio::test]
async fn finance_summary_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let buyer = test
        .user()
        .insert_user("asha@example.com", UserRole::User)
        .await?;
    test.pass()
        .insert_pass_with_coupon(buyer.id, PassType::Premium, PassStatus::Active, 2000, None)
        .await?;
    login(&test, "admin@example.com", UserRole::Admin).await?;

    let state: AppState = test.to_app_state();
    let response = get_finance_summary(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["passRevenue"], 2000);
    assert_eq!(body["activePasses"], 1);

    Ok(())
}
