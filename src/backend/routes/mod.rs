//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Auth and vehicle list routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /login` - Issue a session cookie
//!
//! ## Session protected
//!
//! - `GET /api/v1/vehiclelists` - All vehicle lists
//! - `GET /api/v1/vehiclelist/record?id=L` - Records of list L
//! - `POST /api/v1/vehiclelist/record?id=L` - Append a record
//! - `DELETE /api/v1/vehiclelist/record?id=L&recordId=R` - Remove a record
//!
//! Unknown paths get a JSON 404; wrong verbs on known paths get a JSON 405.
//!
//! # Example
//!
//! ```rust,no_run
//! use kpam::backend::routes::create_router;
//! use kpam::backend::server::state::AppState;
//!
//! let router = create_router(AppState::default());
//! ```

/// Main router creation
pub mod router;

/// Auth and vehicle route tables
pub mod api_routes;

// Re-export commonly used functions
pub use api_routes::{LOGIN_PATH, RECORDS_PATH, VEHICLE_LISTS_PATH};
pub use router::create_router;
