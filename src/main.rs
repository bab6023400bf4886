//! Parklens demo
//!
//! Walks the dashboard computations once and logs the results: overall
//! tiles, a per-park drill-down, and a filtered review feed.

use parklens::analytics::{average_breakdown, filter_reviews, most_positive, positive_rank, ReviewFilter};
use parklens::catalog::Catalog;
use parklens::insight::recommendation_for;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "parklens=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Parklens v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::global();
    tracing::info!(
        "Catalog: {} parks, {} features, {} reviews",
        catalog.parks().len(),
        catalog.features().len(),
        catalog.reviews().len()
    );

    overall_view(catalog);
    park_view(catalog, "Zion");
    filtered_feed(catalog, "Zion", "Camping");
}

fn overall_view(catalog: &Catalog) {
    let breakdown = average_breakdown(catalog.parks());
    tracing::info!(
        "Average sentiment: {:.1}% positive, {:.1}% negative, {:.1}% neutral",
        breakdown.positive,
        breakdown.negative,
        breakdown.neutral
    );

    if let Some(top) = most_positive(catalog.parks()) {
        tracing::info!(
            "Most positive park: {} {} ({}%)",
            top.icon,
            top.name,
            top.shares.positive
        );
    }
}

fn park_view(catalog: &Catalog, name: &str) {
    let Some(park) = catalog.park(name) else {
        tracing::warn!("Park {} not in catalog", name);
        return;
    };

    let rank = positive_rank(catalog.parks(), park.name).unwrap_or(0);
    tracing::info!(
        "{} {}: {}% positive, rank {} of {} ({})",
        park.icon,
        park.name,
        park.shares.positive,
        rank,
        catalog.parks().len(),
        park.url
    );

    let recs = recommendation_for(park.name);
    for improvement in recs.improvements {
        tracing::info!("  suggested: {}", improvement);
    }
}

fn filtered_feed(catalog: &Catalog, park: &str, feature: &str) {
    let filter = ReviewFilter::from_names(Some(park), Some(feature));
    let reviews = filter_reviews(catalog, &filter);

    if reviews.is_empty() {
        tracing::info!("No reviews match {} / {}", park, feature);
        return;
    }

    for review in reviews {
        tracing::info!(
            "[{}] {} - {}: {}",
            review.sentiment,
            review.park,
            review.feature,
            review.text
        );
    }
}
