//! Selector/filter and aggregation logic
//!
//! The only runtime computation the dashboard performs: filtering the
//! review feed by the two selectors, and deriving summary numbers (mean
//! split, ranks, most positive park) from the fixed park catalog.

pub mod aggregate;
pub mod filter;

pub use aggregate::{average_breakdown, most_positive, positive_rank, SentimentBreakdown};
pub use filter::{filter_reviews, ReviewFilter, Selection};
