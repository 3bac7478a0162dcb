//! Provider entry point: logging, configuration, listener, server.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_provider::config::Settings;
use atlas_provider::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_provider=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("atlas-provider v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration from the environment
    let settings = Settings::from_env();

    tracing::info!(
        bind_address = %settings.listener.bind_address,
        atlas_base_url = %settings.atlas.base_url,
        request_timeout_secs = settings.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&settings.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(settings);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
