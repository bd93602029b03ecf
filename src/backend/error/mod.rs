//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and
//! middleware, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use kpam::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("List not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
