//! Parklens REST API
//!
//! HTTP API layer for the dashboard, built with Axum. The endpoints hand
//! out plain data records; any presentation surface (web UI, terminal,
//! notebook) renders them however it likes.
//!
//! # Endpoints
//!
//! ## Catalog
//! - `GET /api/v1/parks` - List all parks with ranks
//! - `GET /api/v1/parks/:name` - Get a specific park
//! - `GET /api/v1/features` - List all reviewable features
//!
//! ## Reviews
//! - `GET /api/v1/reviews?park=&feature=` - Filtered review feed
//!
//! ## Dashboard
//! - `GET /api/v1/summary?park=` - Metric tiles (overall or per-park)
//! - `GET /api/v1/charts/parks` - Park comparison bars
//! - `GET /api/v1/charts/features?feature=` - Feature comparison bars
//! - `GET /api/v1/charts/sentiment?park=` - Sentiment pie split
//!
//! ## Insights
//! - `GET /api/v1/insights` - Aggregate recommendations and panels
//! - `GET /api/v1/insights/:park` - Per-park record ("All Parks" fallback)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use parklens::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog routes
        .route("/parks", get(routes::parks::list_parks))
        .route("/parks/:name", get(routes::parks::get_park))
        .route("/features", get(routes::features::list_features))
        // Review feed
        .route("/reviews", get(routes::reviews::list_reviews))
        // Dashboard routes
        .route("/summary", get(routes::summary::get_summary))
        .route("/charts/parks", get(routes::charts::parks_chart))
        .route("/charts/features", get(routes::charts::features_chart))
        .route("/charts/sentiment", get(routes::charts::sentiment_pie))
        // Insight routes
        .route("/insights", get(routes::insights::overall_insights))
        .route("/insights/:park", get(routes::insights::park_insights));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Parklens API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Parklens API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(ApiConfig::default()))
    }

    async fn get_status(uri: &str) -> StatusCode {
        let app = create_test_app();
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_live() {
        assert_eq!(get_status("/health/live").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        assert_eq!(get_status("/health/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_parks() {
        assert_eq!(get_status("/api/v1/parks").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_park_by_name() {
        assert_eq!(get_status("/api/v1/parks/Zion").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_unknown_park() {
        assert_eq!(
            get_status("/api/v1/parks/Atlantis").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_list_features() {
        assert_eq!(get_status("/api/v1/features").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_filtered_reviews() {
        assert_eq!(
            get_status("/api/v1/reviews?park=Zion&feature=Camping").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_reviews_with_no_matches_still_ok() {
        assert_eq!(
            get_status("/api/v1/reviews?park=Dry%20Tortugas&feature=Parking").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_summary() {
        assert_eq!(get_status("/api/v1/summary").await, StatusCode::OK);
        assert_eq!(
            get_status("/api/v1/summary?park=Yosemite").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_charts() {
        assert_eq!(get_status("/api/v1/charts/parks").await, StatusCode::OK);
        assert_eq!(get_status("/api/v1/charts/features").await, StatusCode::OK);
        assert_eq!(
            get_status("/api/v1/charts/sentiment?park=Zion").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_insights_never_404() {
        assert_eq!(get_status("/api/v1/insights").await, StatusCode::OK);
        assert_eq!(get_status("/api/v1/insights/Zion").await, StatusCode::OK);
        assert_eq!(
            get_status("/api/v1/insights/Atlantis").await,
            StatusCode::OK
        );
    }
}
