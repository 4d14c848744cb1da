use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loket_core::{load_config, validate_config, Config, ServiceHall};

use loket_server::api::create_router;
use loket_server::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("loket {}", VERSION);

    // Determine config path
    let config_path = std::env::var("LOKET_CONFIG").map(PathBuf::from).ok();

    // Load configuration. An explicit path must exist; the implicit
    // default falls back to built-in defaults when absent.
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => {
            let default_path = PathBuf::from("config.toml");
            if default_path.exists() {
                info!("Loading configuration from {:?}", default_path);
                load_config(&default_path)
                    .with_context(|| format!("Failed to load config from {:?}", default_path))?
            } else {
                info!("No configuration file, using defaults");
                Config::default()
            }
        }
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Log a digest of the effective config so deployments are comparable
    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!("Configuration loaded, digest {}", &config_hash[..16]);
    info!(
        "Hall layout: teller \"{}\" x{}, customer service \"{}\" x{}",
        config.hall.teller.prefix,
        config.hall.teller.counters,
        config.hall.customer_service.prefix,
        config.hall.customer_service.counters
    );

    // Create the service hall
    let hall = ServiceHall::new(&config.hall);

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), hall));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
