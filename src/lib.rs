//! # Parklens
//!
//! National Park visitor-sentiment dashboard core. The entire dataset is a
//! compiled-in catalog of pre-baked sentiment statistics; the runtime logic
//! is filtering the review feed by two selectors, a handful of aggregations
//! over the fixed park list, and total-lookup recommendation tables.
//!
//! ## Modules
//!
//! - [`catalog`]: Read-only reference data (parks, features, reviews)
//! - [`analytics`]: Review filtering and sentiment aggregation
//! - [`insight`]: Per-park recommendation and aspect lookup tables
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use parklens::analytics::{average_breakdown, filter_reviews, ReviewFilter};
//! use parklens::catalog::Catalog;
//! use parklens::insight::recommendation_for;
//!
//! let catalog = Catalog::global();
//!
//! // Filter the review feed by park and feature
//! let filter = ReviewFilter::from_names(Some("Zion"), Some("Camping"));
//! let reviews = filter_reviews(catalog, &filter);
//! assert_eq!(reviews.len(), 1);
//!
//! // Aggregate tiles for the "All Parks" view
//! let breakdown = average_breakdown(catalog.parks());
//! assert!(breakdown.positive > 50.0);
//!
//! // Recommendation lookup never fails; unknown keys fall back
//! let recs = recommendation_for("Somewhere Unknown");
//! assert_eq!(recs.park, "All Parks");
//! ```

pub mod analytics;
pub mod api;
pub mod catalog;
pub mod config;
pub mod insight;

// Re-export top-level types for convenience
pub use catalog::{
    AspectMention, Catalog, FeatureRecord, ParkInsight, ParkRecord, RecommendationRecord,
    ReviewRecord, Sentiment, SentimentShares, ALL_FEATURES, ALL_PARKS,
};

pub use analytics::{
    average_breakdown, filter_reviews, most_positive, positive_rank, ReviewFilter, Selection,
    SentimentBreakdown,
};

pub use insight::{insight_for, overall_insight, overall_recommendation, recommendation_for};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
