//! Feature Routes
//!
//! - GET /api/v1/features - List all reviewable features

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FeatureListResponse, FeatureResponse};
use crate::api::state::AppState;
use crate::catalog::FeatureRecord;

/// GET /api/v1/features
///
/// List all features in canonical catalog order.
pub async fn list_features(State(state): State<Arc<AppState>>) -> Json<FeatureListResponse> {
    let features: Vec<FeatureResponse> =
        state.catalog.features().iter().map(feature_to_response).collect();

    Json(FeatureListResponse {
        total: features.len(),
        features,
    })
}

/// Convert a FeatureRecord to its response shape
fn feature_to_response(feature: &FeatureRecord) -> FeatureResponse {
    FeatureResponse {
        name: feature.name.to_string(),
        icon: feature.icon.to_string(),
        positive: feature.shares.positive,
        negative: feature.shares.negative,
        neutral: feature.shares.neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    #[tokio::test]
    async fn test_list_features() {
        let state = Arc::new(AppState::new(ApiConfig::default()));
        let Json(resp) = list_features(State(state)).await;

        assert_eq!(resp.total, 8);
        assert_eq!(resp.features[2].name, "Scenery");
        assert_eq!(resp.features[2].positive, 95);
    }
}
