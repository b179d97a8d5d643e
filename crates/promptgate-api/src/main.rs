//! PromptGate gateway server

use promptgate_api::{AppConfig, AppState, BackendForwarder};
use promptgate_core::{KeywordFilter, ModerationPipeline};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    EnvFilter::new(
                        "promptgate_api=info,promptgate_core=info,promptgate_scanners=info,tower_http=info",
                    )
                }),
        )
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::load()?;

    // Scanner registry is built once here; constructor failures degrade the
    // registry rather than failing startup.
    let registry = promptgate_scanners::default_registry();
    info!(scanners = ?registry.names(), "scanner registry initialized");

    let pipeline = ModerationPipeline::new(KeywordFilter::new(), registry);
    let forwarder = BackendForwarder::new(&config.backend_url, config.backend_timeout())
        .map_err(|e| anyhow::anyhow!("failed to build backend client: {e}"))?;
    let state = AppState::new(pipeline, forwarder);

    let app = promptgate_api::create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("PromptGate listening on http://{}", addr);
    info!(backend = %config.backend_url, "forwarding allowed prompts");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
        _ = ctrl_c => info!("Received Ctrl-C, starting graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting graceful shutdown..."),
    }
}
