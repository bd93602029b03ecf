//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! └── login.rs    - Session issuing handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /login - Issue a session cookie

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse};

// Re-export handlers
pub use login::login;
