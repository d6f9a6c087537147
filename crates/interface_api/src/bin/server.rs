//! Takaful Pricing Core - API Server Binary
//!
//! This binary starts the HTTP API server for the contribution pricing core.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin takaful-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_PRODUCTS_FILE=products/takaful_products.json \
//!     cargo run --bin takaful-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_PRODUCTS_FILE` - JSON product file for the policy catalog
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::path::Path;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_pricing::PolicyCatalog;
use interface_api::{config::ApiConfig, create_router};

/// Product definitions shipped with the binary, used when no product file
/// is present at the configured path
const BUNDLED_PRODUCTS: &str = include_str!("../../../../products/takaful_products.json");

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and the policy catalog, and
/// starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The product file is malformed or contains a misconfigured product
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Takaful Pricing Core API Server"
    );

    let catalog = load_catalog(&config)?;
    tracing::info!(products = catalog.len(), "Policy catalog loaded");

    let addr = config.server_addr();
    let app = create_router(catalog, config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        products_file: std::env::var("API_PRODUCTS_FILE")
            .unwrap_or_else(|_| "products/takaful_products.json".to_string()),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Loads the policy catalog from the configured product file, falling back
/// to the bundled product definitions when the file is absent.
fn load_catalog(config: &ApiConfig) -> anyhow::Result<PolicyCatalog> {
    let path = Path::new(&config.products_file);
    if path.exists() {
        PolicyCatalog::from_file(path)
            .with_context(|| format!("Failed to load products from {}", path.display()))
    } else {
        tracing::warn!(
            path = %path.display(),
            "Product file not found, using bundled products"
        );
        PolicyCatalog::from_json(BUNDLED_PRODUCTS).context("Bundled product file is invalid")
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
