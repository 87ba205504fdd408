//! Integration tests for handler-side input validation.
//!
//! These requests are rejected before any repository call, so they run
//! against the lazily connecting test pool.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creating_a_user_with_an_unknown_role_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/users",
        json!({"name": "Ana", "email": "ana@colegio.edu", "role": "alumno"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("unknown role"));
}

#[tokio::test]
async fn registering_an_empty_device_token_is_rejected() {
    let app = common::build_test_app();
    let id = uuid::Uuid::new_v4();
    let response = post_json(
        app,
        &format!("/api/v1/users/{id}/devices"),
        json!({"token": "   "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creating_a_notification_without_a_title_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/notifications",
        json!({
            "title": "  ",
            "description": "Contenido",
            "recipient": {"type": "all"},
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn creating_a_notification_without_a_description_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/notifications",
        json!({
            "title": "Aviso",
            "description": "",
            "recipient": {"type": "all"},
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creating_an_event_with_an_unknown_category_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/events",
        json!({"title": "Feria de Ciencias", "category": "fiesta", "date": "2025-03-14"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("unknown category"));
}

#[tokio::test]
async fn creating_an_event_without_a_title_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/events",
        json!({"title": "", "category": "academico"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
