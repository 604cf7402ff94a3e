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
        pass::{PassDto, PurchasePassDto},
    },
    server::{
        controller::util::{capability::authorize, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, pass::PassService},
    },
};

pub static PASS_TAG: &str = "pass";

/// Purchase a festival pass
///
/// All unredeemed credits of the user are applied to the price and consumed. Student passes
/// are created awaiting verification by an admin.
#[utoipa::path(
    post,
    path = "/api/passes",
    tag = PASS_TAG,
    request_body = PurchasePassDto,
    responses(
        (status = 201, description = "Pass purchased", body = PassDto),
        (status = 400, description = "Underpaid, invalid student details or unknown coupon", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "User already holds a pass", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchase_pass(
    State(state): State<AppState>,
    session: Session,
    ApiJson(purchase): ApiJson<PurchasePassDto>,
) -> Result<impl IntoResponse, Error> {
    let user = authorize(&state, &session, Action::PurchasePass).await?;

    let pass = PassService::new(&state.db, &state.student_email_domain)
        .purchase_pass(&user, purchase)
        .await?;

    Ok((StatusCode::CREATED, Json(pass)))
}

/// Check in a pass at the gate (volunteer or admin)
#[utoipa::path(
    post,
    path = "/api/passes/{display_id}/check-in",
    tag = PASS_TAG,
    params(("display_id" = String, Path, description = "Display ID printed on the pass")),
    responses(
        (status = 200, description = "Pass checked in", body = PassDto),
        (status = 400, description = "Pass is not active", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a volunteer", body = ErrorDto),
        (status = 404, description = "Pass not found", body = ErrorDto),
        (status = 409, description = "Pass already checked in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    session: Session,
    Path(display_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::CheckInPass).await?;

    let pass = PassService::new(&state.db, &state.student_email_domain)
        .check_in(&display_id)
        .await?;

    Ok((StatusCode::OK, Json(pass)))
}
