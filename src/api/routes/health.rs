//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. The catalog is compiled in, so readiness
/// only verifies it is populated.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if catalog_ok(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with catalog record counts.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let healthy = catalog_ok(&state);

    let catalog = format!(
        "{} parks, {} features, {} reviews",
        state.catalog.parks().len(),
        state.catalog.features().len(),
        state.catalog.reviews().len()
    );

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        catalog,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Check the catalog is populated
fn catalog_ok(state: &AppState) -> bool {
    !state.catalog.parks().is_empty()
        && !state.catalog.features().is_empty()
        && !state.catalog.reviews().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_reports_catalog() {
        let state = Arc::new(AppState::new(ApiConfig::default()));
        let Json(resp) = full_health(State(state)).await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.catalog, "12 parks, 8 features, 20 reviews");
    }
}
