//! Insight Routes
//!
//! Recommendation blocks and aspect panels for a park.
//!
//! - GET /api/v1/insights - Aggregate "All Parks" record
//! - GET /api/v1/insights/:park - Per-park record, with fallback
//!
//! These endpoints never answer 404: the underlying lookups are total
//! functions that resolve unknown keys to the "All Parks" record.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AspectDto, InsightResponse};
use crate::api::state::AppState;
use crate::catalog::AspectMention;
use crate::insight::{insight_for, overall_insight, overall_recommendation, recommendation_for};

/// GET /api/v1/insights
///
/// The aggregate "All Parks" recommendations and panels.
pub async fn overall_insights(State(_state): State<Arc<AppState>>) -> Json<InsightResponse> {
    Json(build_response(crate::catalog::ALL_PARKS))
}

/// GET /api/v1/insights/:park
///
/// Recommendations and panels for one park. Unknown names resolve to the
/// "All Parks" record; the response's `park` field tells the caller which
/// record it actually got.
pub async fn park_insights(
    State(_state): State<Arc<AppState>>,
    Path(park): Path<String>,
) -> Json<InsightResponse> {
    Json(build_response(&park))
}

/// Assemble the combined recommendation + panels payload
fn build_response(park: &str) -> InsightResponse {
    let recommendation = recommendation_for(park);
    let insight = insight_for(park);

    InsightResponse {
        // Both lookups fall back to the same key, so either record names
        // the resolved park
        park: recommendation.park.to_string(),
        improvements: recommendation
            .improvements
            .iter()
            .map(|s| s.to_string())
            .collect(),
        enhancements: recommendation
            .enhancements
            .iter()
            .map(|s| s.to_string())
            .collect(),
        research: recommendation.research.to_string(),
        top_aspects: insight.top_aspects.iter().map(aspect_to_dto).collect(),
        complaints: insight.complaints.iter().map(aspect_to_dto).collect(),
    }
}

/// Convert an AspectMention to its response shape
fn aspect_to_dto(aspect: &AspectMention) -> AspectDto {
    AspectDto {
        label: aspect.label.to_string(),
        icon: aspect.icon.to_string(),
        share: aspect.share,
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
    async fn test_park_insights() {
        let Json(resp) = park_insights(State(test_state()), Path("Zion".to_string())).await;
        assert_eq!(resp.park, "Zion");
        assert_eq!(resp.improvements.len(), 3);
        assert_eq!(resp.complaints.len(), 4);
        assert_eq!(resp.top_aspects[0].label, "Narrows");
    }

    #[tokio::test]
    async fn test_unknown_park_falls_back_not_404() {
        let Json(resp) = park_insights(State(test_state()), Path("Atlantis".to_string())).await;
        assert_eq!(resp.park, "All Parks");

        let Json(overall) = overall_insights(State(test_state())).await;
        assert_eq!(resp.research, overall.research);
    }

    #[test]
    fn test_fallback_matches_table_records() {
        assert_eq!(recommendation_for("Atlantis"), overall_recommendation());
        assert_eq!(insight_for("Atlantis"), overall_insight());
    }
}
