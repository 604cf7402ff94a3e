use festival::{
    model::coupon::CreateCouponDto,
    server::controller::coupon::{create_coupon, get_leaderboard},
};

use super::*;

/// Expect 201 when an admin creates a coupon for a volunteer
#[tokio::test]
async fn admin_creates_coupon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let volunteer = test
        .user()
        .insert_user("vol@example.com", UserRole::Volunteer)
        .await?;
    login(&test, "admin@example.com", UserRole::Admin).await?;

    let state: AppState = test.to_app_state();
    let response = create_coupon(
        State(state),
        test.session.clone(),
        ApiJson(CreateCouponDto {
            code: "vol25".to_string(),
            volunteer_id: volunteer.id,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["code"], "VOL25");

    Ok(())
}

/// Expect volunteers to see the leaderboard
#[tokio::test]
async fn volunteer_views_leaderboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let volunteer = login(&test, "vol@example.com", UserRole::Volunteer).await?;
    test.coupon().insert_coupon("VOL25", volunteer.id).await?;

    let state: AppState = test.to_app_state();
    let response = get_leaderboard(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["code"], "VOL25");
    assert_eq!(body[0]["passesSold"], 0);

    Ok(())
}

/// Expect 403 when a regular user requests the leaderboard
#[tokio::test]
async fn user_cannot_view_leaderboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "asha@example.com", UserRole::User).await?;

    let state: AppState = test.to_app_state();
    let response = get_leaderboard(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
