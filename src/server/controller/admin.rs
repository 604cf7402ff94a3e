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
        finance::FinanceSummaryDto,
        pass::{PassDto, VerifyPassDto},
    },
    server::{
        controller::util::{capability::authorize, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, finance::FinanceService, pass::PassService},
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List passes awaiting student verification
#[utoipa::path(
    get,
    path = "/api/admin/passes/pending",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Passes awaiting verification", body = Vec<PassDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pending_passes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::VerifyPass).await?;

    let passes = PassService::new(&state.db, &state.student_email_domain)
        .list_pending()
        .await?;

    Ok((StatusCode::OK, Json(passes)))
}

/// Approve or reject a pass awaiting verification
#[utoipa::path(
    post,
    path = "/api/admin/passes/{pass_id}/verify",
    tag = ADMIN_TAG,
    params(("pass_id" = i32, Path, description = "Pass ID")),
    request_body = VerifyPassDto,
    responses(
        (status = 200, description = "Pass verified", body = PassDto),
        (status = 400, description = "Pass is not awaiting verification", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Pass not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_pass(
    State(state): State<AppState>,
    session: Session,
    Path(pass_id): Path<i32>,
    ApiJson(verification): ApiJson<VerifyPassDto>,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::VerifyPass).await?;

    let pass = PassService::new(&state.db, &state.student_email_domain)
        .verify_pass(pass_id, verification.approve)
        .await?;

    Ok((StatusCode::OK, Json(pass)))
}

/// Revenue, outstanding credit and pass counts
#[utoipa::path(
    get,
    path = "/api/admin/finance",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Financial summary", body = FinanceSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_finance_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::ViewFinancials).await?;

    let summary = FinanceService::new(&state.db).summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}
