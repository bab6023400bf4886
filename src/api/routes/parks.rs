//! Park Routes
//!
//! Read-only endpoints over the park catalog.
//!
//! - GET /api/v1/parks - List all parks with their ranks
//! - GET /api/v1/parks/:name - Get a specific park

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::positive_rank;
use crate::api::dto::{ParkListResponse, ParkResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::{Catalog, ParkRecord};

/// GET /api/v1/parks
///
/// List all parks in canonical catalog order.
pub async fn list_parks(State(state): State<Arc<AppState>>) -> Json<ParkListResponse> {
    let parks: Vec<ParkResponse> = state
        .catalog
        .parks()
        .iter()
        .map(|p| park_to_response(state.catalog, p))
        .collect();

    Json(ParkListResponse {
        total: parks.len(),
        parks,
    })
}

/// GET /api/v1/parks/:name
///
/// Get a specific park by canonical name. An unknown name is a caller
/// contract violation and answers 404; only recommendation/insight
/// lookups carry fallback semantics.
pub async fn get_park(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ParkResponse>> {
    let park = state
        .catalog
        .park(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Park '{}' not found", name)))?;

    Ok(Json(park_to_response(state.catalog, park)))
}

/// Convert a ParkRecord to its response shape
fn park_to_response(catalog: &Catalog, park: &ParkRecord) -> ParkResponse {
    // Name comes from the catalog, so the rank lookup cannot miss
    let rank = positive_rank(catalog.parks(), park.name).unwrap_or(0);

    ParkResponse {
        name: park.name.to_string(),
        icon: park.icon.to_string(),
        url: park.url.to_string(),
        positive: park.shares.positive,
        negative: park.shares.negative,
        neutral: park.shares.neutral,
        rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(ApiConfig::default()))
    }

    #[tokio::test]
    async fn test_list_parks() {
        let Json(resp) = list_parks(State(test_state())).await;
        assert_eq!(resp.total, 12);
        assert_eq!(resp.parks[0].name, "Yellowstone");
    }

    #[tokio::test]
    async fn test_get_park_carries_url_and_rank() {
        let resp = get_park(State(test_state()), Path("Dry Tortugas".to_string()))
            .await
            .unwrap();
        assert_eq!(resp.0.url, "https://www.nps.gov/drto/index.htm");
        assert_eq!(resp.0.rank, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_park_is_404() {
        let err = get_park(State(test_state()), Path("Atlantis".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
