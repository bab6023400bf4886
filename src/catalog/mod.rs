//! Read-only catalog of parks, features, and visitor reviews
//!
//! The catalog is the process-wide reference dataset for the dashboard:
//! populated once from compile-time constants, never mutated. There is no
//! create/update/delete surface; everything else in the crate reads from
//! it.
//!
//! # Example
//!
//! ```
//! use parklens::catalog::Catalog;
//!
//! let catalog = Catalog::global();
//! let zion = catalog.park("Zion").unwrap();
//! assert_eq!(zion.shares.positive, 70);
//! assert_eq!(catalog.reviews().len(), 20);
//! ```

pub mod data;
pub mod types;

pub use types::{
    AspectMention, FeatureRecord, ParkInsight, ParkRecord, RecommendationRecord, ReviewRecord,
    Sentiment, SentimentShares,
};

use std::sync::OnceLock;

/// Sentinel key for the aggregate view across every park.
///
/// Recommendation and insight lookups fall back to the record stored under
/// this key when asked about a park the tables don't know.
pub const ALL_PARKS: &str = "All Parks";

/// Sentinel label for the unfiltered feature selection.
pub const ALL_FEATURES: &str = "All Features";

/// Immutable view over the compiled-in reference tables
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    parks: &'static [ParkRecord],
    features: &'static [FeatureRecord],
    reviews: &'static [ReviewRecord],
}

impl Catalog {
    /// The process-wide catalog instance
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::builtin)
    }

    /// Build a catalog over the compiled-in tables
    pub fn builtin() -> Self {
        Self {
            parks: data::PARKS,
            features: data::FEATURES,
            reviews: data::REVIEWS,
        }
    }

    /// All parks in canonical catalog order
    pub fn parks(&self) -> &'static [ParkRecord] {
        self.parks
    }

    /// All features in canonical catalog order
    pub fn features(&self) -> &'static [FeatureRecord] {
        self.features
    }

    /// All reviews in insertion order
    pub fn reviews(&self) -> &'static [ReviewRecord] {
        self.reviews
    }

    /// Look up a park by canonical name
    pub fn park(&self, name: &str) -> Option<&'static ParkRecord> {
        self.parks.iter().find(|p| p.name == name)
    }

    /// Look up a feature by canonical name
    pub fn feature(&self, name: &str) -> Option<&'static FeatureRecord> {
        self.features.iter().find(|f| f.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        let catalog = Catalog::global();
        assert_eq!(catalog.parks().len(), 12);
        assert_eq!(catalog.features().len(), 8);
        assert_eq!(catalog.reviews().len(), 20);
    }

    #[test]
    fn test_park_names_unique() {
        let catalog = Catalog::global();
        let names: HashSet<_> = catalog.parks().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), catalog.parks().len());
    }

    #[test]
    fn test_feature_names_unique() {
        let catalog = Catalog::global();
        let names: HashSet<_> = catalog.features().iter().map(|f| f.name).collect();
        assert_eq!(names.len(), catalog.features().len());
    }

    #[test]
    fn test_shares_sum_to_100() {
        let catalog = Catalog::global();
        for park in catalog.parks() {
            assert_eq!(park.shares.total(), 100, "park {}", park.name);
        }
        for feature in catalog.features() {
            assert_eq!(feature.shares.total(), 100, "feature {}", feature.name);
        }
    }

    #[test]
    fn test_reviews_reference_known_records() {
        let catalog = Catalog::global();
        for review in catalog.reviews() {
            assert!(
                catalog.park(review.park).is_some(),
                "review references unknown park {}",
                review.park
            );
            assert!(
                catalog.feature(review.feature).is_some(),
                "review references unknown feature {}",
                review.feature
            );
        }
    }

    #[test]
    fn test_review_icons_match_catalog() {
        let catalog = Catalog::global();
        for review in catalog.reviews() {
            assert_eq!(review.park_icon, catalog.park(review.park).unwrap().icon);
            assert_eq!(
                review.feature_icon,
                catalog.feature(review.feature).unwrap().icon
            );
        }
    }

    #[test]
    fn test_lookup_by_canonical_name() {
        let catalog = Catalog::global();
        assert_eq!(catalog.park("Zion").unwrap().url, "https://www.nps.gov/zion/index.htm");
        assert_eq!(catalog.feature("Camping").unwrap().icon, "🏕️");
        assert!(catalog.park("Nonexistent Park").is_none());
        // Decorated labels are not keys
        assert!(catalog.park("🪨 Zion").is_none());
    }
}
