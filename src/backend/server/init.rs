/**
 * Server Initialization
 *
 * Builds the Axum application from a resolved configuration.
 *
 * # Initialization Process
 *
 * 1. Create the shared store and seed configured vehicle lists
 * 2. Start the background sweep of expired session tokens
 * 3. Create the router with all routes and middleware
 */

use std::sync::{Arc, Weak};
use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::store::Store;
use crate::shared::config::{AppConfig, ConfigError};

/// Create and configure the Axum application
///
/// Must be called from within a Tokio runtime, since it spawns the token
/// sweeper.
pub fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing vehicle list backend");

    let app_state = AppState::from_config(config)?;
    tracing::info!(
        "Store initialized with {} vehicle list(s), session lifetime {}s",
        config.lists.len(),
        app_state.token_ttl.num_seconds()
    );

    spawn_token_sweeper(&app_state.store, config.token_sweep_interval);

    let app = create_router(app_state);
    tracing::info!("Router configured with periodic token sweep");

    Ok(app)
}

/// Periodically remove expired session tokens from `store`
///
/// The task holds only a weak reference and exits once the store is dropped.
pub fn spawn_token_sweeper(store: &Arc<Store>, period: Duration) -> JoinHandle<()> {
    let store: Weak<Store> = Arc::downgrade(store);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;

            let Some(store) = store.upgrade() else {
                tracing::debug!("Store dropped, stopping token sweeper");
                break;
            };

            let removed = store.purge_expired_tokens();
            if removed > 0 {
                tracing::debug!("Purged {} expired session token(s)", removed);
            }
        }
    })
}
