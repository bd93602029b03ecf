/**
 * Error Conversion
 *
 * Renders backend errors as HTTP responses so handlers and middleware can
 * return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "List not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
