//! Tests for the assembled router, exercising routing, JSON extraction and the session layer.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use festival::server::{model::app::AppState, router::routes};
use festival_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::json_body;

fn app(test: &TestContext) -> axum::Router {
    let state: AppState = test.to_app_state();

    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Expect the public event listing to be routed without a session
#[tokio::test]
async fn routes_event_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 1000, 2, 4)
        .build()
        .await?;

    let response = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await[0]["fee"], 1000);

    Ok(())
}

/// Expect a pass purchase without a session cookie to be refused with 401
#[tokio::test]
async fn purchase_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;

    let response = app(&test)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/passes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"passType":"standard","amountPaid":1000}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["code"], "unauthorized");
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect the OpenAPI document to list the registration route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"]["/api/events/{event_id}/register"]["post"].is_object());

    Ok(())
}

/// Expect a registration body missing its roster to be reported as invalid input
#[tokio::test]
async fn malformed_body_is_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_festival_tables()
        .with_event("Hackathon", 500, 1, 4)
        .build()
        .await?;

    let response = app(&test)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/events/1/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"teamName":"x","paymentMode":"online","amountPaid":500}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "invalid_input");
    assert!(body["error"].as_str().is_some_and(|e| e.contains("members")));

    Ok(())
}

/// Expect a body that is not JSON to be reported as invalid input
#[tokio::test]
async fn non_json_body_is_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;

    let response = app(&test)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/passes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "invalid_input");

    Ok(())
}
