//! Parklens API Server
//!
//! Run with: cargo run --bin parklens-api
//!
//! # Configuration
//!
//! Environment variables:
//! - `PARKLENS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PARKLENS_API_PORT`: Port to listen on (default: 8088)
//! - `PARKLENS_LOG_LEVEL`: Log level (default: info)
//! - `PARKLENS_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely when set

use parklens::api::{serve, ApiConfig, AppState};
use parklens::catalog::Catalog;
use parklens::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_tracing(&config);

    tracing::info!("Starting Parklens API server v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::global();
    tracing::info!(
        "Catalog loaded: {} parks, {} features, {} reviews",
        catalog.parks().len(),
        catalog.features().len(),
        catalog.reviews().len()
    );

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
        default_park: config.dashboard.default_park.clone(),
        default_feature: config.dashboard.default_feature.clone(),
    };

    let state = AppState::new(api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Parklens API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "parklens={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
