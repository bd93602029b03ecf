//! Application configuration module
//!
//! Provides the resolved configuration the server runs with, plus the
//! on-disk TOML shape it can be read from.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::shared::vehicle::VehicleList;

/// Base URL used when neither the config file nor the environment sets one
pub const DEFAULT_BASE_URL: &str = "http://localhost:1608";

/// Session lifetime used when none is configured (or zero is configured)
pub const DEFAULT_TOKEN_EXPIRY: Duration = Duration::from_secs(5 * 60);

/// Interval between background sweeps of expired session tokens
pub const DEFAULT_TOKEN_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Public base URL, e.g. `http://localhost:1608`
    pub base_url: String,
    /// How long a session token stays valid after login
    pub token_expiry: Duration,
    /// How often expired tokens are purged from the store
    pub token_sweep_interval: Duration,
    /// Vehicle lists to load into the store at startup
    pub lists: Vec<VehicleList>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_expiry: DEFAULT_TOKEN_EXPIRY,
            token_sweep_interval: DEFAULT_TOKEN_SWEEP_INTERVAL,
            lists: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;
        if self.token_sweep_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "token_sweep_interval_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The `host:port` the server binds to, taken from the base URL
    pub fn listen_addr(&self) -> Result<&str, ConfigError> {
        match self.base_url.strip_prefix("http://") {
            Some(addr) if !addr.is_empty() => Ok(addr.trim_end_matches('/')),
            _ => Err(ConfigError::InvalidUrl(self.base_url.clone())),
        }
    }
}

/// Builder for AppConfig
///
/// Unset values fall back to the defaults. Setters may be called repeatedly;
/// the last call wins, which is how file and environment layers are merged.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    base_url: Option<String>,
    token_expiry: Option<Duration>,
    token_sweep_interval: Option<Duration>,
    lists: Vec<VehicleList>,
}

impl AppConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session token lifetime
    pub fn token_expiry(mut self, expiry: Duration) -> Self {
        self.token_expiry = Some(expiry);
        self
    }

    /// Set the expired-token sweep interval
    pub fn token_sweep_interval(mut self, interval: Duration) -> Self {
        self.token_sweep_interval = Some(interval);
        self
    }

    /// Add vehicle lists to seed the store with
    pub fn lists(mut self, lists: impl IntoIterator<Item = VehicleList>) -> Self {
        self.lists.extend(lists);
        self
    }

    /// Apply every value present in a parsed config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(url) = file.base_url {
            self = self.base_url(url);
        }
        if let Some(secs) = file.token_expiry_secs {
            self = self.token_expiry(Duration::from_secs(secs));
        }
        if let Some(secs) = file.token_sweep_interval_secs {
            self = self.token_sweep_interval(Duration::from_secs(secs));
        }
        self.lists(file.lists)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        // A zero lifetime would reject every session immediately.
        let token_expiry = self
            .token_expiry
            .filter(|expiry| !expiry.is_zero())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY);

        let config = AppConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token_expiry,
            token_sweep_interval: self
                .token_sweep_interval
                .unwrap_or(DEFAULT_TOKEN_SWEEP_INTERVAL),
            lists: self.lists,
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk configuration file (`kpam.toml`)
///
/// ```toml
/// base_url = "http://0.0.0.0:1608"
/// token_expiry_secs = 300
///
/// [[lists]]
/// id = 1
/// displayName = "Fleet"
/// name = "fleet"
/// color = "#336699"
/// order = 0
/// status = 1
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub token_expiry_secs: Option<u64>,
    pub token_sweep_interval_secs: Option<u64>,
    #[serde(default)]
    pub lists: Vec<VehicleList>,
}

impl ConfigFile {
    /// Parse a config file from its TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0} (expected http://host:port)")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
