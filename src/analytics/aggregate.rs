//! Aggregations over the park catalog
//!
//! The dashboard's summary tiles need three derived values: the unweighted
//! mean sentiment split across all parks, a park's 1-based rank by positive
//! share, and the single most positive park. All three operate on the fixed
//! catalog slice; ties are broken by catalog order.

use crate::catalog::ParkRecord;

/// Arithmetic mean of the sentiment shares across a set of parks
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SentimentBreakdown {
    /// Mean positive share, percent
    pub positive: f64,
    /// Mean negative share, percent
    pub negative: f64,
    /// Mean neutral share, percent
    pub neutral: f64,
}

impl SentimentBreakdown {
    /// Sum of the three means
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

/// Unweighted mean of the three shares across `parks`.
///
/// Simple sum divided by count; review volume does not weight the mean.
/// Returns zeroes for an empty slice.
pub fn average_breakdown(parks: &[ParkRecord]) -> SentimentBreakdown {
    if parks.is_empty() {
        return SentimentBreakdown {
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
        };
    }

    let count = parks.len() as f64;
    SentimentBreakdown {
        positive: parks.iter().map(|p| p.shares.positive as f64).sum::<f64>() / count,
        negative: parks.iter().map(|p| p.shares.negative as f64).sum::<f64>() / count,
        neutral: parks.iter().map(|p| p.shares.neutral as f64).sum::<f64>() / count,
    }
}

/// 1-based rank of `name` among `parks` sorted descending by positive share.
///
/// The sort is stable, so parks with equal positive shares rank in catalog
/// order. Returns `None` only when the name is not in the slice.
pub fn positive_rank(parks: &[ParkRecord], name: &str) -> Option<usize> {
    let mut order: Vec<&ParkRecord> = parks.iter().collect();
    order.sort_by(|a, b| b.shares.positive.cmp(&a.shares.positive));

    order
        .iter()
        .position(|p| p.name == name)
        .map(|idx| idx + 1)
}

/// The park with the highest positive share.
///
/// First catalog occurrence wins ties. `None` only for an empty slice.
pub fn most_positive(parks: &[ParkRecord]) -> Option<&ParkRecord> {
    parks.iter().fold(None, |best: Option<&ParkRecord>, park| {
        match best {
            Some(b) if b.shares.positive >= park.shares.positive => Some(b),
            _ => Some(park),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SentimentShares};

    fn park(name: &'static str, positive: u8, negative: u8, neutral: u8) -> ParkRecord {
        ParkRecord {
            name,
            shares: SentimentShares::new(positive, negative, neutral),
            url: "",
            icon: "",
        }
    }

    #[test]
    fn test_average_breakdown_sums_to_100() {
        let catalog = Catalog::global();
        let breakdown = average_breakdown(catalog.parks());

        // Every catalog triple sums to 100, so the means must too
        assert!((breakdown.total() - 100.0).abs() < 1e-9);
        assert!(breakdown.positive > breakdown.negative);
    }

    #[test]
    fn test_average_breakdown_known_values() {
        let parks = [park("A", 80, 20, 0), park("B", 60, 30, 10)];
        let breakdown = average_breakdown(&parks);
        assert_eq!(breakdown.positive, 70.0);
        assert_eq!(breakdown.negative, 25.0);
        assert_eq!(breakdown.neutral, 5.0);
    }

    #[test]
    fn test_average_breakdown_empty() {
        let breakdown = average_breakdown(&[]);
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn test_most_positive_is_rank_one() {
        let catalog = Catalog::global();
        let top = most_positive(catalog.parks()).unwrap();

        assert_eq!(top.name, "Dry Tortugas");
        assert_eq!(positive_rank(catalog.parks(), top.name), Some(1));
    }

    #[test]
    fn test_ranks_form_permutation() {
        let catalog = Catalog::global();
        let mut ranks: Vec<usize> = catalog
            .parks()
            .iter()
            .map(|p| positive_rank(catalog.parks(), p.name).unwrap())
            .collect();
        ranks.sort_unstable();

        let expected: Vec<usize> = (1..=catalog.parks().len()).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn test_rank_ties_break_by_catalog_order() {
        let parks = [park("First", 80, 20, 0), park("Second", 80, 15, 5), park("Third", 90, 10, 0)];
        assert_eq!(positive_rank(&parks, "Third"), Some(1));
        assert_eq!(positive_rank(&parks, "First"), Some(2));
        assert_eq!(positive_rank(&parks, "Second"), Some(3));
    }

    #[test]
    fn test_most_positive_ties_break_by_first_occurrence() {
        let parks = [park("First", 90, 10, 0), park("Second", 90, 5, 5)];
        assert_eq!(most_positive(&parks).unwrap().name, "First");
    }

    #[test]
    fn test_rank_unknown_park() {
        let catalog = Catalog::global();
        assert_eq!(positive_rank(catalog.parks(), "Nonexistent Park"), None);
    }
}
