use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        coupon::{CouponDto, CreateCouponDto, LeaderboardEntryDto},
    },
    server::{
        controller::util::{capability::authorize, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::capability::Action, coupon::CouponService},
    },
};

pub static COUPON_TAG: &str = "coupon";

/// Create a coupon attributed to a volunteer (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/coupons",
    tag = COUPON_TAG,
    request_body = CreateCouponDto,
    responses(
        (status = 201, description = "Coupon created", body = CouponDto),
        (status = 400, description = "Blank code or account is not a volunteer", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    session: Session,
    ApiJson(coupon): ApiJson<CreateCouponDto>,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::ManageCoupons).await?;

    let coupon = CouponService::new(&state.db).create_coupon(coupon).await?;

    Ok((StatusCode::CREATED, Json(coupon)))
}

/// Coupons ranked by passes sold and revenue (volunteer or admin)
#[utoipa::path(
    get,
    path = "/api/coupons/leaderboard",
    tag = COUPON_TAG,
    responses(
        (status = 200, description = "Coupon leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a volunteer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    authorize(&state, &session, Action::ViewLeaderboard).await?;

    let leaderboard = CouponService::new(&state.db).leaderboard().await?;

    Ok((StatusCode::OK, Json(leaderboard)))
}
