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
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::util::{capability::authorize, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, event::EventService},
    },
};

pub static EVENT_TAG: &str = "event";

/// List all events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).list_events().await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let event = EventService::new(&state.db).get_event(event_id).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Create an event (admin only)
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    ApiJson(event): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::ManageEvents).await?;

    let event = EventService::new(&state.db).create_event(event).await?;

    Ok((StatusCode::CREATED, Json(event)))
}
