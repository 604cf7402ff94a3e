use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        registration::{RegisterTeamDto, RegisterTeamResponseDto},
    },
    server::{
        controller::util::{capability::authorize, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, registration::RegistrationService},
    },
};

pub static REGISTRATION_TAG: &str = "registration";

/// Register a team for an event
///
/// The logged in user becomes the team leader. The team is free when every member holds an
/// active pass, otherwise the full event fee is charged and members without a pass receive a
/// credit for their share.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/register",
    tag = REGISTRATION_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    request_body = RegisterTeamDto,
    responses(
        (status = 201, description = "Team registered", body = RegisterTeamResponseDto),
        (status = 400, description = "Invalid roster, ineligible pass redemption or underpaid", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Already registered for this event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_team(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    ApiJson(registration): ApiJson<RegisterTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let user = authorize(&state, &session, Action::RegisterTeam).await?;

    let response = RegistrationService::new(&state.db)
        .register_team(user.id, event_id, registration)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
