use festival::{
    model::registration::{PaymentMode, RegisterTeamDto, TeamMemberDto},
    server::controller::registration::register_team,
};

use super::*;

fn roster(emails: &[&str], payment_mode: PaymentMode, amount_paid: i64) -> RegisterTeamDto {
    RegisterTeamDto {
        team_name: "Byte Me".to_string(),
        members: emails
            .iter()
            .map(|email| TeamMemberDto {
                email: email.to_string(),
                role: "member".to_string(),
            })
            .collect(),
        payment_mode,
        amount_paid,
    }
}

/// Expect 201 with the amount charged when registering a paying team
#[tokio::test]
async fn registers_paying_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 1000, 1, 4)
        .build()
        .await?;
    login(&test, "lead@example.com", UserRole::User).await?;
    test.user()
        .insert_user("mate@example.com", UserRole::User)
        .await?;

    let state: AppState = test.to_app_state();
    let response = register_team(
        State(state),
        test.session.clone(),
        Path(1),
        ApiJson(roster(
            &["lead@example.com", "mate@example.com"],
            PaymentMode::Online,
            1000,
        )),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["amountPaid"], 1000);
    assert!(body["teamId"].is_i64());

    Ok(())
}

/// Expect 400 when redeeming passes for a team where a member lacks one
#[tokio::test]
async fn rejects_ineligible_pass_redemption() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 1000, 1, 4)
        .build()
        .await?;
    let leader = login(&test, "lead@example.com", UserRole::User).await?;
    test.pass()
        .insert_pass(leader.id, PassType::Standard, PassStatus::Active)
        .await?;

    let state: AppState = test.to_app_state();
    let response = register_team(
        State(state),
        test.session.clone(),
        Path(1),
        ApiJson(roster(
            &["lead@example.com", "stranger@example.com"],
            PaymentMode::Pass,
            1000,
        )),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "invalid_input");

    Ok(())
}

/// Expect 409 when the same leader registers twice for an event
#[tokio::test]
async fn conflicts_on_resubmission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 0, 1, 4)
        .build()
        .await?;
    login(&test, "lead@example.com", UserRole::User).await?;

    let state: AppState = test.to_app_state();
    let first = register_team(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        ApiJson(roster(&["lead@example.com"], PaymentMode::Online, 0)),
    )
    .await
    .into_response();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = register_team(
        State(state),
        test.session.clone(),
        Path(1),
        ApiJson(roster(&["lead@example.com"], PaymentMode::Online, 0)),
    )
    .await
    .into_response();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(second).await["code"], "conflict");

    Ok(())
}

/// Expect 404 for an unknown event
#[tokio::test]
async fn returns_not_found_for_unknown_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "lead@example.com", UserRole::User).await?;

    let state: AppState = test.to_app_state();
    let response = register_team(
        State(state),
        test.session.clone(),
        Path(12),
        ApiJson(roster(&["lead@example.com"], PaymentMode::Online, 0)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without a logged in user
#[tokio::test]
async fn requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 1000, 1, 4)
        .build()
        .await?;

    let state: AppState = test.to_app_state();
    let response = register_team(
        State(state),
        test.session.clone(),
        Path(1),
        ApiJson(roster(&["lead@example.com"], PaymentMode::Online, 1000)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
