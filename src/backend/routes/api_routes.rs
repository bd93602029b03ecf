/**
 * API Route Handlers
 *
 * This module defines the routes of the HTTP API:
 * - The public login endpoint
 * - The session-protected vehicle list endpoints
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /login` - Issue a session cookie
 *
 * ## Vehicle Lists (require a session cookie)
 * - `GET /api/v1/vehiclelists` - All vehicle lists
 * - `GET|POST|DELETE /api/v1/vehiclelist/record?id=L` - Records of list L
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::login;
use crate::backend::middleware::{record_scope_middleware, session_middleware};
use crate::backend::server::state::AppState;
use crate::backend::vehicles::{
    create_record, delete_record, get_records, list_vehicle_lists, method_not_allowed,
};

/// Path of the login endpoint
pub const LOGIN_PATH: &str = "/login";

/// Path of the vehicle list index
pub const VEHICLE_LISTS_PATH: &str = "/api/v1/vehiclelists";

/// Path of the per-list record endpoint
pub const RECORDS_PATH: &str = "/api/v1/vehiclelist/record";

/// Configure public authentication routes
///
/// Any verb other than POST on `/login` gets a JSON 405.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(LOGIN_PATH, post(login).fallback(method_not_allowed))
}

/// Configure session-protected vehicle routes
///
/// # Layering
///
/// The session check wraps every route added here, including the 405
/// fallbacks. The record scope check wraps only the record route, and runs
/// after the session check, so a wrong verb on the record route is reported
/// only once both checks pass.
pub fn configure_vehicle_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            VEHICLE_LISTS_PATH,
            get(list_vehicle_lists).fallback(method_not_allowed),
        )
        .route(
            RECORDS_PATH,
            get(get_records)
                .post(create_record)
                .delete(delete_record)
                .fallback(method_not_allowed)
                .layer(middleware::from_fn(record_scope_middleware)),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ));

    router.merge(protected)
}
