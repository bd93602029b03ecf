//! Shared Module
//!
//! Types used by both the HTTP API and the configuration layer. All of them
//! serialize with the camelCase keys clients send and receive.

/// Vehicle list and record types
pub mod vehicle;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use vehicle::{ListId, Record, RecordId, VehicleList};
