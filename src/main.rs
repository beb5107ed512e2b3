//! Linkmap - A minimal URL shortening service
//!
//! Creates 6-character tokens for submitted URLs and resolves them back via
//! HTTP redirect. Persistence is delegated to a pluggable key-value store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkmap::api::create_router;
use linkmap::store::{MappingStore, MemoryStore, RedisStore};
use linkmap::{AppState, Config};

/// Main entry point for the Linkmap service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct the mapping store backend (Redis, or in-memory fallback)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkmap=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Linkmap URL shortening service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, key_prefix={:?}",
        config.server_port, config.key_prefix
    );

    // Construct the mapping store backend
    let store: Arc<dyn MappingStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url, &config.key_prefix)
                .await
                .context("failed to connect to the Redis mapping store")?;
            info!("Using Redis mapping store");
            Arc::new(store)
        }
        None => {
            warn!("REDIS_URL not set, using in-memory store; mappings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Create application state and router
    let state = AppState::new(store);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
