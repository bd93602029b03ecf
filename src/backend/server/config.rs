/**
 * Server Configuration
 *
 * Resolves the [`AppConfig`] the server runs with.
 *
 * # Configuration Sources
 *
 * Lowest precedence first:
 * 1. Built-in defaults (`http://localhost:1608`, 5 minute sessions)
 * 2. The TOML config file named by `--config` (default `kpam.toml`)
 * 3. Environment: `KPAM_URL`, `KPAM_TOKEN_EXPIRY_SECS`
 *
 * A missing config file is logged and skipped. A config file that exists but
 * cannot be read or parsed is an error and stops startup.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::shared::config::{AppConfig, ConfigError, ConfigFile};

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "KPAM_URL";

/// Environment variable overriding the session lifetime, in seconds
pub const ENV_TOKEN_EXPIRY_SECS: &str = "KPAM_TOKEN_EXPIRY_SECS";

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "kpam.toml";

/// Command-line arguments of the server binary
#[derive(Debug, Parser)]
#[command(name = "kpam-server", about = "Vehicle list backend", version)]
pub struct ServerArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Load configuration from `path` and the process environment
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let mut builder = AppConfig::builder();

    match std::fs::read_to_string(path) {
        Ok(text) => {
            builder = builder.merge_file(ConfigFile::from_toml(&text)?);
            tracing::info!("Loaded configuration from {}", path.display());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Config file {} not found, using defaults", path.display());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    }

    if let Some(url) = env_value(ENV_BASE_URL) {
        tracing::info!("{} overrides base URL", ENV_BASE_URL);
        builder = builder.base_url(url);
    }

    if let Some(secs) = env_value(ENV_TOKEN_EXPIRY_SECS) {
        let secs: u64 = secs.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
            key: ENV_TOKEN_EXPIRY_SECS,
            message: e.to_string(),
        })?;
        builder = builder.token_expiry(Duration::from_secs(secs));
    }

    builder.build()
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
