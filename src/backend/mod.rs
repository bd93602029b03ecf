//! Backend Module
//!
//! This module contains all server-side code for KPAM: an Axum HTTP server
//! over an in-memory store of session tokens, vehicle lists and records.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Token, list and record maps behind one lock
//! - **`auth`** - Login and session cookies
//! - **`middleware`** - Session and record-scope checks
//! - **`vehicles`** - Vehicle list and record handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── store/          - In-memory store
//! ├── auth/           - Login and session cookies
//! ├── middleware/     - Request middleware
//! ├── vehicles/       - Vehicle list handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<Store>` and the token lifetime. It is cloned
//! into every handler. A background task sweeps expired tokens; it holds
//! only a weak reference and stops once the store is dropped.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Every error becomes a JSON
//! body `{"error": <message>, "status": <code>}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// In-memory token and vehicle store
pub mod store;

/// Backend error types
pub mod error;

/// Login and session cookies
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Vehicle list and record handlers
pub mod vehicles;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState};
pub use store::Store;
