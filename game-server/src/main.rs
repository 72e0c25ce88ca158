use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use game_core::KeyValueStore;
use game_persistence::{connection::connect_and_migrate, KvRepository};
use game_server::{config::Config, create_routes, session_manager::SessionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Tic-Tac-Toe server...");

    let config = Config::from_env().context("Invalid configuration")?;

    let db = connect_and_migrate(&config.database_url)
        .await
        .context("Failed to connect to database and run migrations")?;
    let store: Arc<dyn KeyValueStore> = Arc::new(KvRepository::new(db));

    let session_manager = Arc::new(SessionManager::open(store, &config.leaderboard_key).await);
    let routes = create_routes(session_manager);

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(config.socket_addr()?, shutdown_signal())
        .context("Failed to bind server address")?;

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM (Ctrl+C elsewhere).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{signal as unix_signal, SignalKind};

        match (
            unix_signal(SignalKind::interrupt()),
            unix_signal(SignalKind::terminate()),
        ) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
                return;
            }
            _ => warn!("Failed to install signal handlers, falling back to Ctrl+C"),
        }
    }

    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully...");
}
