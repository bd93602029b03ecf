/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (login)
 * 2. Vehicle routes (session protected)
 * 3. Fallback handler (JSON 404)
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_vehicle_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the store and token lifetime
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. Every request and
/// response is traced through `tower-http`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());
    let router = configure_vehicle_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let response = create_router(AppState::default())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], 404);
    }

    #[tokio::test]
    async fn test_login_rejects_get() {
        let response = create_router(AppState::default())
            .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
