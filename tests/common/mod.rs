//! Common test utilities and helpers
//!
//! This module provides shared utilities for the HTTP tests:
//! - Seeded application state
//! - Test server construction
//! - Login and session cookie helpers

#![allow(dead_code)]

use axum::http::{header, HeaderName, HeaderValue};
use axum_test::TestServer;
use kpam::backend::routes::create_router;
use kpam::backend::server::AppState;
use kpam::shared::vehicle::{Record, VehicleList};

/// Build a vehicle list fixture
pub fn vehicle_list(id: i64, name: &str) -> VehicleList {
    VehicleList {
        id,
        display_name: name.to_string(),
        name: name.to_lowercase(),
        color: "#3366ff".to_string(),
        order: id as i32,
        status: 1,
    }
}

/// State with three lists:
/// - 1 "Staff" holding two records
/// - 2 "Visitors" with an empty record sequence
/// - 3 "Vans" with no record sequence at all
pub fn seeded_state() -> AppState {
    let state = AppState::default();
    state.store.insert_list(vehicle_list(1, "Staff"));
    state.store.insert_list(vehicle_list(2, "Visitors"));
    state.store.insert_list(vehicle_list(3, "Vans"));
    state.store.insert_records(
        1,
        vec![Record::new(10, "KA-1001", "car"), Record::new(11, "KA-1002", "van")],
    );
    state.store.insert_records(2, Vec::new());
    state
}

/// Create a test server over `state`
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Log in and return the session token from the `s` cookie
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "username": "test",
            "password": "password",
            "isRememberMe": false
        }))
        .await;
    response.assert_status_ok();
    response.cookie("s").value().to_string()
}

/// `Cookie` header carrying a session token
pub fn session_header(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("s={}", token)).expect("token is a valid header value");
    (header::COOKIE, value)
}
