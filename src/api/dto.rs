//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON. The core
//! hands out `&'static` catalog records; these types own their data so
//! any presentation layer can consume them without borrowing the catalog.

use serde::{Deserialize, Serialize};

use crate::analytics::SentimentBreakdown;

// ============================================
// PARK DTOs
// ============================================

/// A single park with its sentiment split and rank
#[derive(Debug, Serialize)]
pub struct ParkResponse {
    /// Canonical park name
    pub name: String,
    /// Display icon
    pub icon: String,
    /// Official NPS page, passed through verbatim
    pub url: String,
    /// Percent of reviews classified positive
    pub positive: u8,
    /// Percent of reviews classified negative
    pub negative: u8,
    /// Percent of reviews classified neutral
    pub neutral: u8,
    /// 1-based rank by positive share across the catalog
    pub rank: usize,
}

/// List parks response
#[derive(Debug, Serialize)]
pub struct ParkListResponse {
    /// Parks in canonical catalog order
    pub parks: Vec<ParkResponse>,
    /// Total count
    pub total: usize,
}

// ============================================
// FEATURE DTOs
// ============================================

/// A single reviewable feature with its sentiment split
#[derive(Debug, Serialize)]
pub struct FeatureResponse {
    /// Canonical feature name
    pub name: String,
    /// Display icon
    pub icon: String,
    /// Percent of mentions classified positive
    pub positive: u8,
    /// Percent of mentions classified negative
    pub negative: u8,
    /// Percent of mentions classified neutral
    pub neutral: u8,
}

/// List features response
#[derive(Debug, Serialize)]
pub struct FeatureListResponse {
    /// Features in canonical catalog order
    pub features: Vec<FeatureResponse>,
    /// Total count
    pub total: usize,
}

// ============================================
// REVIEW DTOs
// ============================================

/// Selector query parameters for the review feed
#[derive(Debug, Default, Deserialize)]
pub struct ReviewParams {
    /// Park selector; absent or "All Parks" means no park filter
    #[serde(default)]
    pub park: Option<String>,
    /// Feature selector; absent or "All Features" means no feature filter
    #[serde(default)]
    pub feature: Option<String>,
}

/// A single review card
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    /// Reviewed park
    pub park: String,
    /// Reviewed feature
    pub feature: String,
    /// Classified sentiment
    pub sentiment: String,
    /// Border color for the review card
    pub sentiment_color: String,
    /// Review text
    pub text: String,
    /// Park display icon
    pub park_icon: String,
    /// Feature display icon
    pub feature_icon: String,
}

/// Filtered review feed response
///
/// `total == 0` is the empty state: the caller renders a
/// "no reviews match" notice, never an error.
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    /// Matching reviews in feed order
    pub reviews: Vec<ReviewResponse>,
    /// Number of matching reviews
    pub total: usize,
    /// Echo of the applied park selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park: Option<String>,
    /// Echo of the applied feature selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
}

// ============================================
// SUMMARY DTOs
// ============================================

/// Selector query parameter shared by summary and chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ParkParam {
    /// Park selector; absent or "All Parks" means the aggregate view
    #[serde(default)]
    pub park: Option<String>,
}

/// Metric tiles for the dashboard header
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// "overall" or "park"
    pub scope: String,
    /// Per-park tiles, present when scope == "park"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park: Option<ParkSummary>,
    /// Aggregate tiles, present when scope == "overall"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallSummary>,
}

/// Tiles for a single selected park
#[derive(Debug, Serialize)]
pub struct ParkSummary {
    /// Canonical park name
    pub name: String,
    /// Display icon
    pub icon: String,
    /// Official NPS page
    pub url: String,
    /// Percent positive
    pub positive: u8,
    /// Percent negative
    pub negative: u8,
    /// Percent neutral
    pub neutral: u8,
    /// 1-based rank by positive share
    pub rank: usize,
    /// Number of parks ranked against
    pub total_parks: usize,
}

/// Tiles for the aggregate view
#[derive(Debug, Serialize)]
pub struct OverallSummary {
    /// Number of parks in the catalog
    pub total_parks: usize,
    /// Unweighted mean split across all parks
    pub average: SentimentBreakdown,
    /// The single most positive park
    pub most_positive: MostPositivePark,
}

/// "Most positive park" tile
#[derive(Debug, Serialize)]
pub struct MostPositivePark {
    /// Canonical park name
    pub name: String,
    /// Display icon
    pub icon: String,
    /// Its positive share, percent
    pub positive: u8,
}

// ============================================
// CHART DTOs
// ============================================

/// Selector query parameter for the feature comparison chart
#[derive(Debug, Default, Deserialize)]
pub struct FeatureParam {
    /// Feature selector; absent or "All Features" keeps every feature
    #[serde(default)]
    pub feature: Option<String>,
}

/// Stacked bar chart payload
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// Chart title
    pub title: String,
    /// Labels for x-axis
    pub labels: Vec<String>,
    /// Data series, one per sentiment
    pub datasets: Vec<ChartDataset>,
}

/// Single dataset for a chart
#[derive(Debug, Serialize)]
pub struct ChartDataset {
    /// Dataset label
    pub label: String,
    /// Data values
    pub data: Vec<f64>,
    /// Suggested color
    pub color: String,
}

/// Pie chart payload for the sentiment split
#[derive(Debug, Serialize)]
pub struct PieResponse {
    /// Chart title
    pub title: String,
    /// Slice labels
    pub labels: Vec<String>,
    /// Slice values
    pub values: Vec<f64>,
    /// Slice colors
    pub colors: Vec<String>,
}

// ============================================
// INSIGHT DTOs
// ============================================

/// One aspect mention inside an insight panel
#[derive(Debug, Serialize)]
pub struct AspectDto {
    /// Aspect label
    pub label: String,
    /// Display icon
    pub icon: String,
    /// Percent of mentions
    pub share: u8,
}

/// Recommendations and insight panels for a park
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    /// Park the record resolved to; "All Parks" when the lookup fell back
    pub park: String,
    /// Suggested improvements
    pub improvements: Vec<String>,
    /// Potential enhancements
    pub enhancements: Vec<String>,
    /// Research summary
    pub research: String,
    /// Top positive aspects panel
    pub top_aspects: Vec<AspectDto>,
    /// Common complaints panel
    pub complaints: Vec<AspectDto>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Catalog status with record counts
    pub catalog: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
