use festival::{
    model::pass::PurchasePassDto,
    server::controller::pass::{check_in, purchase_pass},
};

use super::*;

fn purchase(pass_type: PassType, amount_paid: i64) -> PurchasePassDto {
    PurchasePassDto {
        pass_type,
        amount_paid,
        coupon_code: None,
        is_reva_student: false,
        srn: None,
        department: None,
    }
}

/// Expect 201 with the credit adjusted pass
#[tokio::test]
async fn purchases_pass_with_credit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 300, false).await?;

    let state: AppState = test.to_app_state();
    let response = purchase_pass(
        State(state),
        test.session.clone(),
        ApiJson(purchase(PassType::Standard, 700)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "active");
    assert_eq!(body["amountPaid"], 700);
    assert_eq!(body["creditApplied"], 300);

    Ok(())
}

/// Expect 400 when paying less than the credit adjusted price
#[tokio::test]
async fn rejects_underpayment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 300, false).await?;

    let state: AppState = test.to_app_state();
    let response = purchase_pass(
        State(state),
        test.session.clone(),
        ApiJson(purchase(PassType::Standard, 600)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when the user already holds a pass
#[tokio::test]
async fn conflicts_with_existing_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::User).await?;
    test.pass()
        .insert_pass(user.id, PassType::Premium, PassStatus::Active)
        .await?;

    let state: AppState = test.to_app_state();
    let response = purchase_pass(
        State(state),
        test.session.clone(),
        ApiJson(purchase(PassType::Standard, 1000)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect volunteers to check in an active pass
#[tokio::test]
async fn volunteer_checks_in_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let holder = test
        .user()
        .insert_user("asha@example.com", UserRole::User)
        .await?;
    let pass = test
        .pass()
        .insert_pass(holder.id, PassType::Standard, PassStatus::Active)
        .await?;
    login(&test, "vol@example.com", UserRole::Volunteer).await?;

    let state: AppState = test.to_app_state();
    let response = check_in(
        State(state.clone()),
        test.session.clone(),
        Path(pass.display_id.clone()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(json_body(response).await["checkedInAt"].is_string());

    let again = check_in(State(state), test.session.clone(), Path(pass.display_id))
        .await
        .into_response();
    assert_eq!(again.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 403 when a regular user attempts a check-in
#[tokio::test]
async fn user_cannot_check_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = login(&test, "asha@example.com", UserRole::User).await?;
    let pass = test
        .pass()
        .insert_pass(user.id, PassType::Standard, PassStatus::Active)
        .await?;

    let state: AppState = test.to_app_state();
    let response = check_in(State(state), test.session.clone(), Path(pass.display_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
