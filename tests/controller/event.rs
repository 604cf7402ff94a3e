use festival::{
    model::event::CreateEventDto,
    server::controller::event::{create_event, get_event, list_events},
};

use super::*;

fn create_dto() -> CreateEventDto {
    CreateEventDto {
        name: "Battle of Bands".to_string(),
        description: Some("Live music".to_string()),
        venue: None,
        fee: 1500,
        min_team_size: 3,
        max_team_size: 6,
    }
}

/// Expect the public event list without a session
#[tokio::test]
async fn lists_events_publicly() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 1000, 2, 4)
        .build()
        .await?;

    let state: AppState = test.to_app_state();
    let response = list_events(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["name"], "Hackathon");
    assert_eq!(body[0]["minTeamSize"], 2);

    Ok(())
}

/// Expect 404 for an unknown event
#[tokio::test]
async fn returns_not_found_for_unknown_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;

    let state: AppState = test.to_app_state();
    let response = get_event(State(state), Path(4)).await.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "not_found");

    Ok(())
}

/// Expect 201 when an admin creates an event
#[tokio::test]
async fn admin_creates_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "admin@example.com", UserRole::Admin).await?;

    let state: AppState = test.to_app_state();
    let response = create_event(State(state), test.session.clone(), ApiJson(create_dto()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 403 when a volunteer attempts to create an event
#[tokio::test]
async fn volunteer_cannot_create_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    login(&test, "vol@example.com", UserRole::Volunteer).await?;

    let state: AppState = test.to_app_state();
    let response = create_event(State(state), test.session.clone(), ApiJson(create_dto()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["code"], "forbidden");

    Ok(())
}
