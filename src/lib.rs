//! KPAM - Main Library
//!
//! KPAM is a small in-memory HTTP service for managing vehicle lists
//! (for example staff cars or visitor vans) and the license-plate records
//! each list contains. Clients log in to obtain a session cookie and then
//! read and edit records through a JSON API.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared by the API and configuration
//!   - Vehicle list and record structures
//!   - Layered application configuration
//!
//! - **`backend`** - The HTTP server
//!   - Axum router, session and record-scope middleware
//!   - Token, list and record store behind a single lock
//!   - Login and vehicle list handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use kpam::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(std::path::Path::new("kpam.toml"))?;
//! let app = create_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.listen_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All mutable state lives in one `Store` shared as `Arc<Store>`. A single
//! `std::sync::Mutex` guards it and is never held across an `.await`.
//!
//! # Error Handling
//!
//! - `backend::error::BackendError` for request failures, rendered as JSON
//! - `shared::config::ConfigError` for startup failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
