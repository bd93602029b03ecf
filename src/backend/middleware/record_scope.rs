/**
 * Record Scope Middleware
 *
 * Resolves which vehicle list a `/api/v1/vehiclelist/record` request
 * targets. The list id comes from the `id` query parameter and is
 * attached to request extensions as [`ListScope`].
 */

use axum::{
    extract::{FromRequestParts, Query, Request},
    http::{request::Parts, Uri},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::shared::vehicle::ListId;

/// List targeted by a records request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListScope(pub ListId);

/// Read a required integer query parameter
///
/// When the key repeats, its first occurrence is used. A missing or empty
/// value and a value that is not a signed 64-bit integer are both
/// `400 Bad Request`.
pub fn required_i64_param(uri: &Uri, name: &str) -> Result<i64, BackendError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).map_err(|e| {
        tracing::warn!("Unparseable query string {:?}: {}", uri.query(), e);
        BackendError::bad_request(format!("Invalid {} parameter", name))
    })?;

    let raw = pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing {} parameter on {}", name, uri.path());
            BackendError::bad_request(format!("Missing {} parameter", name))
        })?;

    raw.parse::<i64>().map_err(|_| {
        tracing::warn!("Non-integer {} parameter: {}", name, raw);
        BackendError::bad_request(format!("Invalid {} parameter", name))
    })
}

/// Record scope middleware
///
/// Returns 400 Bad Request if `id` is missing or not an integer. The list
/// itself is not looked up here; handlers decide what an unknown list means.
pub async fn record_scope_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let list_id = required_i64_param(request.uri(), "id")?;
    request.extensions_mut().insert(ListScope(list_id));

    Ok(next.run(request).await)
}

/// Axum extractor for the list scope
impl<S> FromRequestParts<S> for ListScope
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<ListScope>().copied().ok_or_else(|| {
            tracing::warn!("ListScope not found in request extensions");
            BackendError::bad_request("Missing id parameter")
        })
    }
}
