/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the Axum router. It
 * owns the shared [`Store`] and the session lifetime used at login.
 *
 * # Thread Safety
 *
 * The store is shared as `Arc<Store>` and synchronizes itself internally, so
 * `AppState` is cheap to clone into every request.
 */

use std::sync::Arc;

use chrono::TimeDelta;

use crate::backend::store::Store;
use crate::shared::config::{AppConfig, ConfigError, DEFAULT_TOKEN_EXPIRY};

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Tokens, lists and records behind one lock
    pub store: Arc<Store>,

    /// Lifetime of a session token issued at login
    pub token_ttl: TimeDelta,
}

impl AppState {
    /// Wrap an existing store
    pub fn new(store: Arc<Store>, token_ttl: TimeDelta) -> Self {
        Self { store, token_ttl }
    }

    /// Build state for `config` around a fresh store seeded with its lists
    ///
    /// Each seeded list also gets an empty record sequence, so its records
    /// can be read immediately.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let token_ttl =
            TimeDelta::from_std(config.token_expiry).map_err(|e| ConfigError::InvalidValue {
                key: "token_expiry_secs",
                message: e.to_string(),
            })?;

        let store = Arc::new(Store::new());
        for list in &config.lists {
            store.insert_records(list.id, Vec::new());
            store.insert_list(list.clone());
        }

        Ok(Self::new(store, token_ttl))
    }
}

impl Default for AppState {
    fn default() -> Self {
        let token_ttl = TimeDelta::from_std(DEFAULT_TOKEN_EXPIRY).unwrap_or(TimeDelta::minutes(5));
        Self::new(Arc::new(Store::new()), token_ttl)
    }
}
