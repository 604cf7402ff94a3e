//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/events` - List events
/// - `POST /api/events` - Create an event (admin)
/// - `GET /api/events/{event_id}` - Get an event
/// - `POST /api/events/{event_id}/register` - Register a team
/// - `POST /api/passes` - Purchase a pass
/// - `POST /api/passes/{display_id}/check-in` - Check in a pass (volunteer, admin)
/// - `GET /api/user/pass` - Get the current user's pass
/// - `GET /api/user/credits` - Get the current user's credits
/// - `GET /api/coupons/leaderboard` - Coupon leaderboard (volunteer, admin)
/// - `POST /api/admin/coupons` - Create a coupon (admin)
/// - `GET /api/admin/passes/pending` - Passes awaiting verification (admin)
/// - `POST /api/admin/passes/{pass_id}/verify` - Verify a pass (admin)
/// - `GET /api/admin/finance` - Financial summary (admin)
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, student_email_domain };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Festival", description = "Festival registration and pass API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session user routes"),
        (name = controller::event::EVENT_TAG, description = "Event catalogue"),
        (name = controller::registration::REGISTRATION_TAG, description = "Team registration"),
        (name = controller::pass::PASS_TAG, description = "Pass purchase and check-in"),
        (name = controller::user::USER_TAG, description = "Records of the logged in user"),
        (name = controller::coupon::COUPON_TAG, description = "Volunteer coupons"),
        (name = controller::admin::ADMIN_TAG, description = "Back office"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(controller::event::get_event))
        .routes(routes!(controller::registration::register_team))
        .routes(routes!(controller::pass::purchase_pass))
        .routes(routes!(controller::pass::check_in))
        .routes(routes!(controller::user::get_my_pass))
        .routes(routes!(controller::user::get_my_credits))
        .routes(routes!(controller::coupon::get_leaderboard))
        .routes(routes!(controller::coupon::create_coupon))
        .routes(routes!(controller::admin::list_pending_passes))
        .routes(routes!(controller::admin::verify_pass))
        .routes(routes!(controller::admin::get_finance_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
