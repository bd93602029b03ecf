//! Authentication API integration tests
//!
//! Tests for login and for the session check on protected routes.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use chrono::TimeDelta;
use common::{login, seeded_state, session_header, test_server};
use kpam::backend::server::AppState;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_login_success() {
    let server = test_server(AppState::default());

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "username": "test",
            "password": "password",
            "isRememberMe": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({"redirectUrl": "/", "isAuthorized": true}));

    let cookie = response.cookie("s");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert!(cookie.expires_datetime().is_some());
}

#[tokio::test]
async fn test_login_accepts_missing_fields() {
    let server = test_server(AppState::default());

    let response = server.post("/login").json(&serde_json::json!({})).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_null_body() {
    let server = test_server(AppState::default());

    let response = server.post("/login").text("null").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.cookie("s").value().is_empty());
}

#[tokio::test]
async fn test_login_malformed_body() {
    let server = test_server(AppState::default());

    let response = server.post("/login").text("{\"username\": ").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_wrong_method() {
    let server = test_server(AppState::default());

    let response = server.get("/login").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 405);
}

#[tokio::test]
async fn test_each_login_gets_distinct_owner() {
    let state = AppState::default();
    let server = test_server(state.clone());

    let mut owners = HashSet::new();
    for _ in 0..10 {
        let token = login(&server).await;
        owners.insert(state.store.validate_token(&token).unwrap());
    }

    assert_eq!(owners.len(), 10);
}

#[tokio::test]
async fn test_protected_route_requires_cookie() {
    let server = test_server(seeded_state());

    let response = server.get("/api/v1/vehiclelists").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({"error": "Unauthorized", "status": 401}));
}

#[tokio::test]
async fn test_login_then_list_with_cookie() {
    let server = test_server(seeded_state());
    let token = login(&server).await;
    let (name, value) = session_header(&token);

    let response = server.get("/api/v1/vehiclelists").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let server = test_server(seeded_state());
    let (name, value) = session_header("0123456789abcdef0123456789abcdef");

    let response = server.get("/api/v1/vehiclelists").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized_and_evicted() {
    let state = seeded_state();
    let server = test_server(state.clone());
    let token = state.store.create_token(99, TimeDelta::seconds(-1));
    let (name, value) = session_header(&token.value);

    let response = server.get("/api/v1/vehiclelists").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(state.store.token_count(), 0);
}

#[tokio::test]
async fn test_records_route_requires_cookie_before_scope() {
    let server = test_server(seeded_state());

    // No cookie and no id: the session check answers first
    let response = server.get("/api/v1/vehiclelist/record").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let server = test_server(AppState::default());

    let response = server.get("/api/v2/nothing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 404);
}
