/**
 * Backend Error Types
 *
 * Every way an API request can fail. All variants are terminal for the
 * request: the handler stops and the error is rendered as a JSON response.
 *
 * # Error Categories
 *
 * - `BadRequest` - Malformed JSON body, missing or unparseable numeric parameter
 * - `Unauthorized` - Missing, unknown or expired session cookie
 * - `NotFound` - Unknown list id, record id or route
 * - `MethodNotAllowed` - Wrong verb on a known route
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::{DeleteError, TokenRejection};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kpam::backend::error::BackendError;
///
/// let err = BackendError::bad_request("Missing id parameter");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be understood
    #[error("{message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// No valid session accompanies the request
    #[error("Unauthorized")]
    Unauthorized,

    /// The addressed list, record or route does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The route exists but not for this HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A JSON request body failed to decode
    #[error("Bad request: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<TokenRejection> for BackendError {
    fn from(_: TokenRejection) -> Self {
        Self::Unauthorized
    }
}

impl From<DeleteError> for BackendError {
    fn from(err: DeleteError) -> Self {
        match err {
            DeleteError::UnknownList(_) => Self::not_found("List not found"),
            DeleteError::UnknownRecord { .. } => Self::not_found("Record not found"),
        }
    }
}
