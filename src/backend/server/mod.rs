//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - Application state
//! ├── config.rs       - CLI arguments and layered config loading
//! └── init.rs         - App creation and the token sweeper
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, then `kpam.toml`, then environment
//! 2. **State Creation**: a fresh `Store`, seeded with configured lists
//! 3. **Background Tasks**: periodic purge of expired session tokens
//! 4. **Router Creation**: routes, session and record-scope middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use kpam::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("kpam.toml".as_ref())?;
//! let app = create_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.listen_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{load_config, ServerArgs};
pub use init::create_app;
pub use state::AppState;
