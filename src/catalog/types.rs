//! Core record types for the park sentiment catalog
//!
//! This module defines the fundamental types used throughout the crate:
//! - `ParkRecord` / `FeatureRecord`: sentiment breakdown per park or feature
//! - `ReviewRecord`: a single visitor review with its classified sentiment
//! - `RecommendationRecord`: per-park improvement/enhancement suggestions
//! - `ParkInsight`: per-park top aspects and common complaints
//!
//! All records are plain `&'static` data; the catalog is compiled in and
//! never mutated at runtime.

use serde::Serialize;

/// Classified sentiment of a single review
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Visitor expressed a positive experience
    Positive,
    /// Visitor expressed a negative experience
    Negative,
    /// Mixed or factual review with no clear leaning
    Neutral,
}

impl Sentiment {
    /// Get all sentiments for iteration
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    }

    /// Display color used by chart and review-card payloads
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#4CAF50",
            Sentiment::Negative => "#F44336",
            Sentiment::Neutral => "#FF9800",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Percentage split of review sentiment for a park or feature
///
/// Each share is 0-100. The three shares of every catalog entry sum to
/// exactly 100; `total()` exists so tests can assert it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SentimentShares {
    /// Percent of reviews classified positive
    pub positive: u8,
    /// Percent of reviews classified negative
    pub negative: u8,
    /// Percent of reviews classified neutral
    pub neutral: u8,
}

impl SentimentShares {
    /// Construct a share triple
    pub const fn new(positive: u8, negative: u8, neutral: u8) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Sum of the three shares
    pub fn total(&self) -> u16 {
        self.positive as u16 + self.negative as u16 + self.neutral as u16
    }
}

/// A single park in the catalog
///
/// `name` is the canonical lookup key. The display icon is carried as a
/// separate field so no lookup ever has to parse a decorated label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ParkRecord {
    /// Canonical park name (unique key)
    pub name: &'static str,
    /// Sentiment breakdown across this park's reviews
    pub shares: SentimentShares,
    /// Official NPS page, surfaced verbatim and never fetched
    pub url: &'static str,
    /// Display icon for UI labels
    pub icon: &'static str,
}

/// A reviewable park feature (hiking, camping, crowds, ...)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Canonical feature name (unique key)
    pub name: &'static str,
    /// Sentiment breakdown across this feature's mentions
    pub shares: SentimentShares,
    /// Display icon for UI labels
    pub icon: &'static str,
}

/// A single visitor review
///
/// `park` and `feature` are weak name references into the park and
/// feature tables; the review does not own either record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReviewRecord {
    /// Name of the reviewed park
    pub park: &'static str,
    /// Feature the review is about
    pub feature: &'static str,
    /// Classified sentiment
    pub sentiment: Sentiment,
    /// Review text
    pub text: &'static str,
    /// Park display icon for review cards
    pub park_icon: &'static str,
    /// Feature display icon for review cards
    pub feature_icon: &'static str,
}

/// Per-park recommendation block
///
/// Keyed by park name, including the synthetic "All Parks" aggregate
/// record that unknown keys fall back to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RecommendationRecord {
    /// Park name this record belongs to
    pub park: &'static str,
    /// Suggested operational improvements
    pub improvements: &'static [&'static str],
    /// Potential visitor-experience enhancements
    pub enhancements: &'static [&'static str],
    /// Free-text research summary behind the suggestions
    pub research: &'static str,
}

/// One aspect mention inside an insight panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AspectMention {
    /// Aspect label ("Wildlife", "Parking", ...)
    pub label: &'static str,
    /// Display icon
    pub icon: &'static str,
    /// Percent of mentions (positive share for aspects, negative for complaints)
    pub share: u8,
}

/// Per-park insight panels: top positive aspects and common complaints
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ParkInsight {
    /// Park name this record belongs to
    pub park: &'static str,
    /// Highest-rated aspects, ordered by positive share
    pub top_aspects: &'static [AspectMention],
    /// Most common complaints, ordered by negative mention share
    pub complaints: &'static [AspectMention],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_colors() {
        assert_eq!(Sentiment::Positive.color(), "#4CAF50");
        assert_eq!(Sentiment::Negative.color(), "#F44336");
        assert_eq!(Sentiment::Neutral.color(), "#FF9800");
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::all().len(), 3);
    }

    #[test]
    fn test_shares_total() {
        let shares = SentimentShares::new(82, 12, 6);
        assert_eq!(shares.total(), 100);

        // total() must not overflow u8 arithmetic
        let max = SentimentShares::new(100, 100, 100);
        assert_eq!(max.total(), 300);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
