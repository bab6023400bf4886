//! Review Feed Routes
//!
//! - GET /api/v1/reviews?park=&feature= - Filtered visitor reviews

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{filter_reviews, ReviewFilter, Selection};
use crate::api::dto::{ReviewListResponse, ReviewParams, ReviewResponse};
use crate::api::state::AppState;
use crate::catalog::ReviewRecord;

/// GET /api/v1/reviews
///
/// The review feed, filtered by the two selectors. Both selectors accept a
/// canonical name or their "All ..." sentinel; an absent parameter means
/// the sentinel. Zero matches returns `total: 0` with an empty list so the
/// caller can render the empty-state notice.
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewParams>,
) -> Json<ReviewListResponse> {
    // Absent selectors fall back to the configured first-load selection
    let park_label = params.park.as_deref().unwrap_or(&state.config.default_park);
    let feature_label = params
        .feature
        .as_deref()
        .unwrap_or(&state.config.default_feature);

    let filter = ReviewFilter::new(
        Selection::park_label(park_label),
        Selection::feature_label(feature_label),
    );
    let reviews = filter_reviews(state.catalog, &filter);

    if reviews.is_empty() {
        tracing::debug!(
            park = ?params.park,
            feature = ?params.feature,
            "No reviews match the current filters"
        );
    }

    Json(ReviewListResponse {
        total: reviews.len(),
        reviews: reviews.into_iter().map(review_to_response).collect(),
        park: params.park,
        feature: params.feature,
    })
}

/// Convert a ReviewRecord to a review card
fn review_to_response(review: &ReviewRecord) -> ReviewResponse {
    ReviewResponse {
        park: review.park.to_string(),
        feature: review.feature.to_string(),
        sentiment: review.sentiment.to_string(),
        sentiment_color: review.sentiment.color().to_string(),
        text: review.text.to_string(),
        park_icon: review.park_icon.to_string(),
        feature_icon: review.feature_icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(ApiConfig::default()))
    }

    async fn feed(park: Option<&str>, feature: Option<&str>) -> ReviewListResponse {
        let params = ReviewParams {
            park: park.map(String::from),
            feature: feature.map(String::from),
        };
        let Json(resp) = list_reviews(State(test_state()), Query(params)).await;
        resp
    }

    #[tokio::test]
    async fn test_unfiltered_feed() {
        let resp = feed(None, None).await;
        assert_eq!(resp.total, 20);
        assert_eq!(resp.reviews[0].park, "Yellowstone");
    }

    #[tokio::test]
    async fn test_zion_camping_review_card() {
        let resp = feed(Some("Zion"), Some("Camping")).await;
        assert_eq!(resp.total, 1);
        assert_eq!(resp.reviews[0].sentiment, "negative");
        assert_eq!(resp.reviews[0].sentiment_color, "#F44336");
    }

    #[tokio::test]
    async fn test_empty_state_is_not_an_error() {
        let resp = feed(Some("Dry Tortugas"), Some("Parking")).await;
        assert_eq!(resp.total, 0);
        assert!(resp.reviews.is_empty());
        assert_eq!(resp.park.as_deref(), Some("Dry Tortugas"));
    }
}
