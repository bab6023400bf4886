//! Chart Routes
//!
//! Chart-ready payloads for the dashboard's three visualizations.
//!
//! - GET /api/v1/charts/parks - Stacked bars comparing parks
//! - GET /api/v1/charts/features?feature= - Stacked bars comparing features
//! - GET /api/v1/charts/sentiment?park= - Pie split (aggregate or per-park)

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::average_breakdown;
use crate::api::dto::{ChartDataset, ChartResponse, FeatureParam, ParkParam, PieResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::{Sentiment, ALL_FEATURES, ALL_PARKS};

/// GET /api/v1/charts/parks
///
/// Stacked bar chart comparing the sentiment split of every park, in
/// catalog order.
pub async fn parks_chart(State(state): State<Arc<AppState>>) -> Json<ChartResponse> {
    let parks = state.catalog.parks();

    let labels = parks.iter().map(|p| p.name.to_string()).collect();
    let datasets = vec![
        sentiment_dataset(
            Sentiment::Positive,
            parks.iter().map(|p| p.shares.positive as f64).collect(),
        ),
        sentiment_dataset(
            Sentiment::Negative,
            parks.iter().map(|p| p.shares.negative as f64).collect(),
        ),
        sentiment_dataset(
            Sentiment::Neutral,
            parks.iter().map(|p| p.shares.neutral as f64).collect(),
        ),
    ];

    Json(ChartResponse {
        title: "Park Sentiment Distribution".to_string(),
        labels,
        datasets,
    })
}

/// GET /api/v1/charts/features
///
/// Stacked bar chart comparing feature sentiment. A feature selector
/// narrows the chart to that single feature; the sentinel or an absent
/// parameter keeps all of them. An unknown feature name answers 404.
pub async fn features_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeatureParam>,
) -> ApiResult<Json<ChartResponse>> {
    let features = match params.feature.as_deref() {
        None => state.catalog.features().to_vec(),
        Some(ALL_FEATURES) => state.catalog.features().to_vec(),
        Some(name) => {
            let feature = state
                .catalog
                .feature(name)
                .ok_or_else(|| ApiError::NotFound(format!("Feature '{}' not found", name)))?;
            vec![*feature]
        }
    };

    let labels = features.iter().map(|f| f.name.to_string()).collect();
    let datasets = vec![
        sentiment_dataset(
            Sentiment::Positive,
            features.iter().map(|f| f.shares.positive as f64).collect(),
        ),
        sentiment_dataset(
            Sentiment::Negative,
            features.iter().map(|f| f.shares.negative as f64).collect(),
        ),
        sentiment_dataset(
            Sentiment::Neutral,
            features.iter().map(|f| f.shares.neutral as f64).collect(),
        ),
    ];

    Ok(Json(ChartResponse {
        title: "Feature Sentiment Analysis".to_string(),
        labels,
        datasets,
    }))
}

/// GET /api/v1/charts/sentiment
///
/// Pie chart of the sentiment split: a single park's shares when one is
/// selected, the unweighted mean across all parks otherwise.
pub async fn sentiment_pie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParkParam>,
) -> ApiResult<Json<PieResponse>> {
    let (title, positive, negative, neutral) = match params.park.as_deref() {
        None | Some(ALL_PARKS) => {
            let avg = average_breakdown(state.catalog.parks());
            (
                "Overall Sentiment Distribution".to_string(),
                avg.positive,
                avg.negative,
                avg.neutral,
            )
        }
        Some(name) => {
            let park = state
                .catalog
                .park(name)
                .ok_or_else(|| ApiError::NotFound(format!("Park '{}' not found", name)))?;
            (
                format!("{} Sentiment Distribution", park.name),
                park.shares.positive as f64,
                park.shares.negative as f64,
                park.shares.neutral as f64,
            )
        }
    };

    Ok(Json(PieResponse {
        title,
        labels: Sentiment::all().iter().map(|s| s.to_string()).collect(),
        values: vec![positive, negative, neutral],
        colors: Sentiment::all().iter().map(|s| s.color().to_string()).collect(),
    }))
}

/// Build one chart dataset for a sentiment series
fn sentiment_dataset(sentiment: Sentiment, data: Vec<f64>) -> ChartDataset {
    ChartDataset {
        label: sentiment.to_string(),
        data,
        color: sentiment.color().to_string(),
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
    async fn test_parks_chart_shape() {
        let Json(chart) = parks_chart(State(test_state())).await;
        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[0].label, "positive");
        assert_eq!(chart.datasets[0].data[0], 78.0); // Yellowstone
    }

    #[tokio::test]
    async fn test_features_chart_narrows_to_one_feature() {
        let params = FeatureParam {
            feature: Some("Crowds".to_string()),
        };
        let chart = features_chart(State(test_state()), Query(params))
            .await
            .unwrap();
        assert_eq!(chart.0.labels, vec!["Crowds"]);
        assert_eq!(chart.0.datasets[1].data, vec![65.0]);
    }

    #[tokio::test]
    async fn test_unknown_feature_is_404() {
        let params = FeatureParam {
            feature: Some("Skydiving".to_string()),
        };
        let err = features_chart(State(test_state()), Query(params))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_aggregate_pie_sums_to_100() {
        let pie = sentiment_pie(State(test_state()), Query(ParkParam::default()))
            .await
            .unwrap();
        let total: f64 = pie.0.values.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(pie.0.colors[0], "#4CAF50");
    }

    #[tokio::test]
    async fn test_park_pie_uses_park_shares() {
        let params = ParkParam {
            park: Some("Big Bend".to_string()),
        };
        let pie = sentiment_pie(State(test_state()), Query(params))
            .await
            .unwrap();
        assert_eq!(pie.0.values, vec![82.0, 12.0, 6.0]);
        assert_eq!(pie.0.title, "Big Bend Sentiment Distribution");
    }
}
