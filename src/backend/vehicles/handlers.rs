/**
 * Vehicle List Handlers
 *
 * HTTP handlers for the vehicle list endpoints. All of them run behind the
 * session middleware; the record handlers also run behind the record scope
 * middleware and read the target list from [`ListScope`].
 *
 * # Endpoints
 *
 * - `GET /api/v1/vehiclelists` - All lists, sorted by id
 * - `GET /api/v1/vehiclelist/record?id=L` - Records of list L
 * - `POST /api/v1/vehiclelist/record?id=L` - Append a record to list L
 * - `DELETE /api/v1/vehiclelist/record?id=L&recordId=R` - Remove record R
 */

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::{required_i64_param, ListScope, SessionOwner};
use crate::backend::server::state::AppState;
use crate::backend::vehicles::types::{RecordsResponse, VehicleListsResponse};
use crate::shared::vehicle::Record;

/// List all vehicle lists
pub async fn list_vehicle_lists(
    State(state): State<AppState>,
    SessionOwner(owner_id): SessionOwner,
) -> Json<VehicleListsResponse> {
    let lists = state.store.lists();
    tracing::debug!("Owner {} listed {} vehicle lists", owner_id, lists.len());

    Json(VehicleListsResponse::new(lists))
}

/// Get the records of the scoped list
///
/// # Errors
///
/// * `404 Not Found` - If the list has no record sequence
pub async fn get_records(
    State(state): State<AppState>,
    ListScope(list_id): ListScope,
) -> Result<Json<RecordsResponse>, BackendError> {
    let entries = state.store.records(list_id).ok_or_else(|| {
        tracing::warn!("Records requested for unknown list {}", list_id);
        BackendError::not_found("List not found")
    })?;

    Ok(Json(RecordsResponse { entries }))
}

/// Append a record to the scoped list
///
/// The list's sequence is created if it does not exist yet.
///
/// # Errors
///
/// * `400 Bad Request` - If the body is neither a JSON record nor `null`
pub async fn create_record(
    State(state): State<AppState>,
    SessionOwner(owner_id): SessionOwner,
    ListScope(list_id): ListScope,
    body: Bytes,
) -> Result<StatusCode, BackendError> {
    // A JSON `null` body appends a zero-valued record.
    let record = serde_json::from_slice::<Option<Record>>(&body)
        .map_err(|e| {
            tracing::warn!("Malformed record body for list {}: {}", list_id, e);
            BackendError::from(e)
        })?
        .unwrap_or_default();

    let record_id = record.id;
    let len = state.store.append_record(list_id, record);
    tracing::info!(
        "Owner {} added record {} to list {} ({} records)",
        owner_id,
        record_id,
        list_id,
        len
    );

    Ok(StatusCode::CREATED)
}

/// Remove the first record with the given `recordId` from the scoped list
///
/// # Errors
///
/// * `400 Bad Request` - If `recordId` is missing or not an integer
/// * `404 Not Found` - If the list or the record does not exist
pub async fn delete_record(
    State(state): State<AppState>,
    SessionOwner(owner_id): SessionOwner,
    ListScope(list_id): ListScope,
    uri: Uri,
) -> Result<StatusCode, BackendError> {
    let record_id = required_i64_param(&uri, "recordId")?;

    let removed = state.store.delete_record(list_id, record_id).map_err(|e| {
        tracing::warn!("Delete by owner {} failed: {}", owner_id, e);
        BackendError::from(e)
    })?;

    tracing::info!(
        "Owner {} removed record {} ({}) from list {}",
        owner_id,
        removed.id,
        removed.plate,
        list_id
    );

    Ok(StatusCode::OK)
}

/// Fallback for unsupported verbs on a known route
pub async fn method_not_allowed() -> BackendError {
    BackendError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::vehicle::VehicleList;

    fn state_with_list(list_id: i64, records: Vec<Record>) -> AppState {
        let state = AppState::default();
        state.store.insert_list(VehicleList {
            id: list_id,
            ..VehicleList::default()
        });
        state.store.insert_records(list_id, records);
        state
    }

    #[tokio::test]
    async fn test_get_records_unknown_list() {
        let result = get_records(State(AppState::default()), ListScope(9)).await;
        assert!(matches!(result, Err(BackendError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_records_empty_list() {
        let Json(response) = get_records(State(state_with_list(1, Vec::new())), ListScope(1))
            .await
            .unwrap();
        assert!(response.entries.is_empty());
    }

    #[tokio::test]
    async fn test_create_record_creates_sequence() {
        let state = AppState::default();
        let body = Bytes::from_static(br#"{"id":5,"plate":"AB-123","vehicleType":"car"}"#);

        let status = create_record(State(state.clone()), SessionOwner(1), ListScope(3), body)
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(state.store.records(3), Some(vec![Record::new(5, "AB-123", "car")]));
    }

    #[tokio::test]
    async fn test_create_record_null_body() {
        let state = state_with_list(1, Vec::new());

        let status = create_record(
            State(state.clone()),
            SessionOwner(1),
            ListScope(1),
            Bytes::from_static(b"null"),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(state.store.records(1), Some(vec![Record::default()]));
    }

    #[tokio::test]
    async fn test_create_record_malformed_body() {
        let state = state_with_list(1, Vec::new());
        let result = create_record(
            State(state.clone()),
            SessionOwner(1),
            ListScope(1),
            Bytes::from_static(b"[1, 2"),
        )
        .await;

        assert!(matches!(result, Err(BackendError::MalformedBody(_))));
        assert_eq!(state.store.records(1), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_delete_record_requires_record_id() {
        let state = state_with_list(1, vec![Record::new(1, "A", "car")]);
        let uri: Uri = "/api/v1/vehiclelist/record?id=1".parse().unwrap();

        let result = delete_record(State(state), SessionOwner(1), ListScope(1), uri).await;
        assert!(matches!(result, Err(BackendError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_delete_record_unknown_record() {
        let state = state_with_list(1, vec![Record::new(1, "A", "car")]);
        let uri: Uri = "/api/v1/vehiclelist/record?id=1&recordId=2".parse().unwrap();

        let result = delete_record(State(state.clone()), SessionOwner(1), ListScope(1), uri).await;
        assert!(matches!(result, Err(BackendError::NotFound { .. })));
        assert_eq!(state.store.records(1).map(|r| r.len()), Some(1));
    }
}
