//! Authentication Module
//!
//! Issues session cookies at login and reads them back on protected routes.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - Session cookie encoding and decoding
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     └── login.rs    - Login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: client posts any credentials → owner id allocated → token
//!    stored → `s` cookie set
//! 2. **Protected request**: `s` cookie → token validated by the session
//!    middleware → owner id attached to the request
//!
//! # Security
//!
//! - Tokens are random UUIDv4 values, not derived from the owner or the clock
//! - Cookies are `HttpOnly` and `SameSite=Lax`
//! - Tokens expire after the configured lifetime and are purged from memory
//! - Credentials are not verified; there is no user store

/// Session cookie handling
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::login;
pub use handlers::types::{LoginRequest, LoginResponse};
pub use sessions::{session_cookie, session_token, SESSION_COOKIE};
