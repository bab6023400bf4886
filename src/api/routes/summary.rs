//! Summary Routes
//!
//! - GET /api/v1/summary?park= - Metric tiles for the dashboard header

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{average_breakdown, most_positive, positive_rank};
use crate::api::dto::{MostPositivePark, OverallSummary, ParkParam, ParkSummary, SummaryResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::ALL_PARKS;

/// GET /api/v1/summary
///
/// Metric tiles: aggregate numbers when no park (or the "All Parks"
/// sentinel) is selected, per-park numbers plus rank otherwise. A park
/// name the catalog doesn't know is a caller error and answers 404.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParkParam>,
) -> ApiResult<Json<SummaryResponse>> {
    let catalog = state.catalog;

    // An absent selector falls back to the configured first-load selection
    let label = params.park.as_deref().unwrap_or(&state.config.default_park);

    let selected = match label {
        ALL_PARKS => None,
        name => Some(
            catalog
                .park(name)
                .ok_or_else(|| ApiError::NotFound(format!("Park '{}' not found", name)))?,
        ),
    };

    let response = match selected {
        Some(park) => SummaryResponse {
            scope: "park".to_string(),
            park: Some(ParkSummary {
                name: park.name.to_string(),
                icon: park.icon.to_string(),
                url: park.url.to_string(),
                positive: park.shares.positive,
                negative: park.shares.negative,
                neutral: park.shares.neutral,
                rank: positive_rank(catalog.parks(), park.name).unwrap_or(0),
                total_parks: catalog.parks().len(),
            }),
            overall: None,
        },
        None => {
            // The catalog is never empty; most_positive only fails on an
            // empty slice
            let top = most_positive(catalog.parks())
                .ok_or_else(|| ApiError::Internal("park catalog is empty".to_string()))?;

            SummaryResponse {
                scope: "overall".to_string(),
                park: None,
                overall: Some(OverallSummary {
                    total_parks: catalog.parks().len(),
                    average: average_breakdown(catalog.parks()),
                    most_positive: MostPositivePark {
                        name: top.name.to_string(),
                        icon: top.icon.to_string(),
                        positive: top.shares.positive,
                    },
                }),
            }
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(ApiConfig::default()))
    }

    async fn summary(park: Option<&str>) -> ApiResult<SummaryResponse> {
        let params = ParkParam {
            park: park.map(String::from),
        };
        get_summary(State(test_state()), Query(params))
            .await
            .map(|Json(resp)| resp)
    }

    #[tokio::test]
    async fn test_overall_summary() {
        let resp = summary(None).await.unwrap();
        assert_eq!(resp.scope, "overall");

        let overall = resp.overall.unwrap();
        assert_eq!(overall.total_parks, 12);
        assert_eq!(overall.most_positive.name, "Dry Tortugas");
        assert!((overall.average.total() - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_all_parks_sentinel_means_overall() {
        let resp = summary(Some("All Parks")).await.unwrap();
        assert_eq!(resp.scope, "overall");
        assert!(resp.park.is_none());
    }

    #[tokio::test]
    async fn test_park_summary_has_rank() {
        let resp = summary(Some("Zion")).await.unwrap();
        assert_eq!(resp.scope, "park");

        let park = resp.park.unwrap();
        assert_eq!(park.positive, 70);
        assert_eq!(park.rank, 11);
        assert_eq!(park.total_parks, 12);
    }

    #[tokio::test]
    async fn test_unknown_park_is_404() {
        let err = summary(Some("Atlantis")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
