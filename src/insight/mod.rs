//! Recommendation and insight lookups
//!
//! Static per-park text blocks keyed by canonical park name. Both lookups
//! are total functions: a key the tables don't know resolves to the
//! "All Parks" aggregate record, never to an error.

pub mod aspects;
pub mod recommendations;

pub use aspects::{insight_for, overall_insight, INSIGHTS};
pub use recommendations::{overall_recommendation, recommendation_for, RECOMMENDATIONS};
