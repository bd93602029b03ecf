/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Process
 *
 * 1. Decode the JSON body
 * 2. Allocate an owner identity for the session
 * 3. Issue a session token in the store
 * 4. Set the `s` cookie and return the redirect target
 *
 * Credentials are not checked against any user store; any well-formed body
 * gets a session.
 */

use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::{session_cookie, token_prefix};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not valid JSON of the expected shape
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "dispatcher", "password": "secret", "isRememberMe": false}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: s=3f2b...; HttpOnly; SameSite=Lax; Path=/; Expires=...
///
/// {"redirectUrl": "/", "isAuthorized": true}
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<LoginResponse>), BackendError> {
    // A JSON `null` body is treated as an empty request.
    let request = serde_json::from_slice::<Option<LoginRequest>>(&body)
        .map_err(|e| {
            tracing::warn!("Malformed login body: {}", e);
            BackendError::from(e)
        })?
        .unwrap_or_default();
    tracing::info!("Login request for: {}", request.username);

    let owner_id = state.store.allocate_owner_id();
    let token = state.store.create_token(owner_id, state.token_ttl);

    tracing::info!(
        "Session {}.. issued to owner {} until {}",
        token_prefix(&token.value),
        owner_id,
        token.expires_at
    );

    Ok((jar.add(session_cookie(&token)), Json(LoginResponse::authorized())))
}
