//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! - **`session`** - Rejects requests without a valid session cookie
//! - **`record_scope`** - Resolves the `id` query parameter of records routes
//!
//! Both attach a typed value to the request extensions that handlers read
//! back through an extractor (`SessionOwner`, `ListScope`).
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use kpam::backend::middleware::{session_middleware, SessionOwner};
//! use kpam::backend::server::AppState;
//!
//! async fn whoami(SessionOwner(owner): SessionOwner) -> String {
//!     owner.to_string()
//! }
//!
//! let state = AppState::default();
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), session_middleware))
//!     .with_state(state);
//! ```

pub mod record_scope;
pub mod session;

pub use record_scope::{record_scope_middleware, required_i64_param, ListScope};
pub use session::{session_middleware, SessionOwner};
