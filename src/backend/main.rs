/**
 * KPAM Server Entry Point
 *
 * Loads configuration, builds the Axum app and serves it until Ctrl-C.
 */

use clap::Parser;
use kpam::backend::server::{create_app, load_config, ServerArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let args = ServerArgs::parse();
    let config = load_config(&args.config)?;
    tracing::info!(
        "Config loaded: base_url={}, token_expiry={:?}, {} lists",
        config.base_url,
        config.token_expiry,
        config.lists.len()
    );

    let app = create_app(&config)?;

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
