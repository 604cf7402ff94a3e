use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, credit::CreditBalanceDto, pass::PassDto},
    server::{
        controller::util::capability::authorize,
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, credit::CreditService, pass::PassService},
    },
};

pub static USER_TAG: &str = "user";

/// Get the most recent pass of the logged in user
#[utoipa::path(
    get,
    path = "/api/user/pass",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The user's pass", body = PassDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User has no pass", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_pass(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = authorize(&state, &session, Action::ViewOwnRecords).await?;

    let pass = PassService::new(&state.db, &state.student_email_domain)
        .get_my_pass(user.id)
        .await?;

    Ok((StatusCode::OK, Json(pass)))
}

/// Get the unredeemed credits of the logged in user and their balance
#[utoipa::path(
    get,
    path = "/api/user/credits",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Unredeemed credits", body = CreditBalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_credits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = authorize(&state, &session, Action::ViewOwnRecords).await?;

    let balance = CreditService::new(&state.db).get_balance(user.id).await?;

    Ok((StatusCode::OK, Json(balance)))
}
