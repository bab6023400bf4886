//! Review selection and filtering
//!
//! Resolves the two user-chosen selectors (park, feature) to the subset of
//! matching reviews. Matching is exact string equality on canonical names;
//! the original feed order is preserved and an empty result is a normal
//! outcome, not an error.

use crate::catalog::{Catalog, ReviewRecord, ALL_FEATURES, ALL_PARKS};

/// One selector value: everything, or a single canonical name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No filtering on this axis
    #[default]
    All,
    /// Keep only records matching this canonical name
    Only(String),
}

impl Selection {
    /// Resolve a park selector label ("All Parks" is the sentinel)
    pub fn park_label(label: &str) -> Self {
        if label == ALL_PARKS {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    /// Resolve a feature selector label ("All Features" is the sentinel)
    pub fn feature_label(label: &str) -> Self {
        if label == ALL_FEATURES {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    /// Whether this selection keeps everything
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether a canonical name passes this selection
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == name,
        }
    }
}

/// The pair of selector values driving the review feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Park selector
    pub park: Selection,
    /// Feature selector
    pub feature: Selection,
}

impl ReviewFilter {
    /// Unfiltered view (both selectors at their sentinel)
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from the two selector values
    pub fn new(park: Selection, feature: Selection) -> Self {
        Self { park, feature }
    }

    /// Build a filter from optional canonical names, as the API receives
    /// them: `None` means the selector is at its sentinel.
    pub fn from_names(park: Option<&str>, feature: Option<&str>) -> Self {
        Self {
            park: park.map_or(Selection::All, Selection::park_label),
            feature: feature.map_or(Selection::All, Selection::feature_label),
        }
    }

    /// Whether a review passes both selectors
    pub fn matches(&self, review: &ReviewRecord) -> bool {
        self.park.matches(review.park) && self.feature.matches(review.feature)
    }
}

/// Filter the catalog's review feed, preserving insertion order.
///
/// Returns an empty vector when nothing matches; callers render the
/// empty-state notice instead of treating this as a failure.
pub fn filter_reviews(catalog: &Catalog, filter: &ReviewFilter) -> Vec<&'static ReviewRecord> {
    catalog
        .reviews()
        .iter()
        .filter(|r| filter.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sentiment;

    #[test]
    fn test_all_all_returns_full_feed_in_order() {
        let catalog = Catalog::global();
        let reviews = filter_reviews(catalog, &ReviewFilter::all());

        assert_eq!(reviews.len(), catalog.reviews().len());
        for (got, expected) in reviews.iter().zip(catalog.reviews()) {
            assert_eq!(*got, expected);
        }
    }

    #[test]
    fn test_park_filter_returns_exact_subset() {
        let catalog = Catalog::global();
        for park in catalog.parks() {
            let filter = ReviewFilter::from_names(Some(park.name), None);
            let reviews = filter_reviews(catalog, &filter);

            let expected: Vec<_> = catalog
                .reviews()
                .iter()
                .filter(|r| r.park == park.name)
                .collect();
            assert_eq!(reviews, expected, "park {}", park.name);
        }
    }

    #[test]
    fn test_feature_filter() {
        let catalog = Catalog::global();
        let filter = ReviewFilter::from_names(None, Some("Wildlife"));
        let reviews = filter_reviews(catalog, &filter);

        assert_eq!(reviews.len(), 4);
        assert!(reviews.iter().all(|r| r.feature == "Wildlife"));
    }

    #[test]
    fn test_zero_matches_yields_empty_vec() {
        let catalog = Catalog::global();

        // Dry Tortugas has no Parking review
        let filter = ReviewFilter::from_names(Some("Dry Tortugas"), Some("Parking"));
        assert!(filter_reviews(catalog, &filter).is_empty());

        // Unknown park is treated the same way: empty, not an error
        let filter = ReviewFilter::from_names(Some("Nonexistent Park"), None);
        assert!(filter_reviews(catalog, &filter).is_empty());
    }

    #[test]
    fn test_zion_camping_scenario() {
        let catalog = Catalog::global();
        let filter = ReviewFilter::from_names(Some("Zion"), Some("Camping"));
        let reviews = filter_reviews(catalog, &filter);

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].sentiment, Sentiment::Negative);
        assert_eq!(
            reviews[0].text,
            "Campgrounds were overcrowded and facilities needed maintenance."
        );
    }

    #[test]
    fn test_sentinel_labels_select_everything() {
        let catalog = Catalog::global();
        let filter = ReviewFilter::from_names(Some("All Parks"), Some("All Features"));
        assert_eq!(
            filter_reviews(catalog, &filter).len(),
            catalog.reviews().len()
        );
        assert!(filter.park.is_all());
        assert!(filter.feature.is_all());
    }
}
