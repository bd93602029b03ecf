/**
 * Session Cookies
 *
 * Encodes issued session tokens as the `s` cookie and reads them back from
 * incoming requests. Token issuance and validation live in the store.
 */

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;

use crate::backend::store::IssuedToken;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "s";

/// Build the cookie that hands `token` to the client
///
/// The cookie expires together with the token.
pub fn session_cookie(token: &IssuedToken) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, token.value.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    match OffsetDateTime::from_unix_timestamp(token.expires_at.timestamp()) {
        Ok(expires) => cookie.set_expires(expires),
        Err(e) => tracing::warn!("Session expiry out of cookie range, sending session cookie: {}", e),
    }

    cookie
}

/// Read the session token from a request's cookies
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Short, loggable prefix of a token
pub fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}
