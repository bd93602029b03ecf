/**
 * Session Middleware
 *
 * Protects routes that require a logged-in session. It reads the session
 * token from the `s` cookie, validates it against the store and provides
 * the owner id to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{session_token, token_prefix};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::OwnerId;

/// Owner of the validated session, attached to request extensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOwner(pub OwnerId);

/// Session middleware
///
/// This middleware:
/// 1. Reads the token from the `s` cookie
/// 2. Validates it, evicting it if expired
/// 3. Attaches the owner id to request extensions
///
/// Returns 401 Unauthorized if the cookie is missing or the token is
/// unknown or expired.
pub async fn session_middleware(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = session_token(&jar).ok_or_else(|| {
        tracing::warn!("Missing session cookie on {}", request.uri().path());
        BackendError::Unauthorized
    })?;

    let owner_id = app_state.store.validate_token(&token).map_err(|e| {
        tracing::warn!("Session {}.. rejected: {}", token_prefix(&token), e);
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(SessionOwner(owner_id));

    Ok(next.run(request).await)
}

/// Axum extractor for the session owner
///
/// Only succeeds behind `session_middleware`.
impl<S> FromRequestParts<S> for SessionOwner
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<SessionOwner>().copied().ok_or_else(|| {
            tracing::warn!("SessionOwner not found in request extensions");
            BackendError::Unauthorized
        })
    }
}
