//! Parklens CLI
//!
//! Terminal renderer for the dashboard data:
//! - Summary tiles (overall or per-park)
//! - Park and feature tables
//! - Filtered review feed
//! - Recommendations and insight panels
//!
//! Works directly on the compiled-in catalog; no server required.

use anyhow::Result;
use clap::{Parser, Subcommand};
use parklens::analytics::{average_breakdown, filter_reviews, most_positive, positive_rank, ReviewFilter};
use parklens::catalog::Catalog;
use parklens::config::generate_default_config;
use parklens::insight::{insight_for, recommendation_for};
use serde_json::json;

#[derive(Parser)]
#[command(name = "parklens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "National Park visitor-sentiment dashboard")]
#[command(long_about = "Parklens renders pre-baked sentiment statistics about \
U.S. National Park visitor reviews:\nfilter the review feed, compare parks and \
features, and read per-park recommendations.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show summary tiles
    Summary {
        /// Park name (default: all parks)
        #[arg(short, long)]
        park: Option<String>,
    },

    /// List all parks with their sentiment split and rank
    Parks,

    /// List all reviewable features
    Features,

    /// Show the review feed, optionally filtered
    Reviews {
        /// Park name filter
        #[arg(short, long)]
        park: Option<String>,
        /// Feature name filter
        #[arg(short = 'F', long)]
        feature: Option<String>,
    },

    /// Show recommendations and insight panels for a park
    Insights {
        /// Park name (unknown names fall back to "All Parks")
        park: String,
    },

    /// Print a default config file to stdout
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::global();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Summary { park } => summary(catalog, park.as_deref(), json_output)?,
        Commands::Parks => parks(catalog, json_output)?,
        Commands::Features => features(catalog, json_output)?,
        Commands::Reviews { park, feature } => {
            reviews(catalog, park.as_deref(), feature.as_deref(), json_output)?
        }
        Commands::Insights { park } => insights(&park, json_output)?,
        Commands::Config => print!("{}", generate_default_config()),
    }

    Ok(())
}

fn summary(catalog: &Catalog, park: Option<&str>, json_output: bool) -> Result<()> {
    match park {
        Some(name) if name != parklens::ALL_PARKS => {
            let park = catalog
                .park(name)
                .ok_or_else(|| anyhow::anyhow!("park '{}' not in catalog", name))?;
            let rank = positive_rank(catalog.parks(), park.name).unwrap_or(0);

            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "park": park.name,
                        "positive": park.shares.positive,
                        "negative": park.shares.negative,
                        "neutral": park.shares.neutral,
                        "rank": rank,
                        "total_parks": catalog.parks().len(),
                        "url": park.url,
                    }))?
                );
            } else {
                println!("{} {}", park.icon, park.name);
                println!("  Positive sentiment: {}%", park.shares.positive);
                println!("  Negative sentiment: {}%", park.shares.negative);
                println!("  Neutral sentiment:  {}%", park.shares.neutral);
                println!("  Rank (by positive): {} of {}", rank, catalog.parks().len());
                println!("  Official site:      {}", park.url);
            }
        }
        _ => {
            let breakdown = average_breakdown(catalog.parks());
            // Catalog is never empty
            let top = most_positive(catalog.parks())
                .ok_or_else(|| anyhow::anyhow!("park catalog is empty"))?;

            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "total_parks": catalog.parks().len(),
                        "average_positive": breakdown.positive,
                        "average_negative": breakdown.negative,
                        "average_neutral": breakdown.neutral,
                        "most_positive": {
                            "park": top.name,
                            "positive": top.shares.positive,
                        },
                    }))?
                );
            } else {
                println!("All Parks");
                println!("  Total parks:        {}", catalog.parks().len());
                println!("  Average positive:   {:.1}%", breakdown.positive);
                println!("  Average negative:   {:.1}%", breakdown.negative);
                println!("  Average neutral:    {:.1}%", breakdown.neutral);
                println!(
                    "  Most positive park: {} {} ({}%)",
                    top.icon, top.name, top.shares.positive
                );
            }
        }
    }
    Ok(())
}

fn parks(catalog: &Catalog, json_output: bool) -> Result<()> {
    if json_output {
        let rows: Vec<_> = catalog
            .parks()
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "positive": p.shares.positive,
                    "negative": p.shares.negative,
                    "neutral": p.shares.neutral,
                    "rank": positive_rank(catalog.parks(), p.name),
                    "url": p.url,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<16} {:>4} {:>9} {:>9} {:>8}", "PARK", "RANK", "POSITIVE", "NEGATIVE", "NEUTRAL");
        for park in catalog.parks() {
            println!(
                "{:<16} {:>4} {:>8}% {:>8}% {:>7}%",
                park.name,
                positive_rank(catalog.parks(), park.name).unwrap_or(0),
                park.shares.positive,
                park.shares.negative,
                park.shares.neutral
            );
        }
    }
    Ok(())
}

fn features(catalog: &Catalog, json_output: bool) -> Result<()> {
    if json_output {
        let rows: Vec<_> = catalog
            .features()
            .iter()
            .map(|f| {
                json!({
                    "name": f.name,
                    "positive": f.shares.positive,
                    "negative": f.shares.negative,
                    "neutral": f.shares.neutral,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<12} {:>9} {:>9} {:>8}", "FEATURE", "POSITIVE", "NEGATIVE", "NEUTRAL");
        for feature in catalog.features() {
            println!(
                "{:<12} {:>8}% {:>8}% {:>7}%",
                feature.name, feature.shares.positive, feature.shares.negative, feature.shares.neutral
            );
        }
    }
    Ok(())
}

fn reviews(
    catalog: &Catalog,
    park: Option<&str>,
    feature: Option<&str>,
    json_output: bool,
) -> Result<()> {
    let filter = ReviewFilter::from_names(park, feature);
    let matches = filter_reviews(catalog, &filter);

    if json_output {
        let rows: Vec<_> = matches
            .iter()
            .map(|r| {
                json!({
                    "park": r.park,
                    "feature": r.feature,
                    "sentiment": r.sentiment.to_string(),
                    "text": r.text,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No reviews match the current filters");
        return Ok(());
    }

    for review in matches {
        println!(
            "{}{} {} - {} [{}]",
            review.park_icon, review.feature_icon, review.park, review.feature, review.sentiment
        );
        println!("  {}", review.text);
    }
    Ok(())
}

fn insights(park: &str, json_output: bool) -> Result<()> {
    let recs = recommendation_for(park);
    let insight = insight_for(park);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "park": recs.park,
                "improvements": recs.improvements,
                "enhancements": recs.enhancements,
                "research": recs.research,
                "top_aspects": insight.top_aspects,
                "complaints": insight.complaints,
            }))?
        );
        return Ok(());
    }

    println!("Insights for {}", recs.park);

    println!("\nSuggested Improvements");
    for item in recs.improvements {
        println!("  - {}", item);
    }

    println!("\nPotential Enhancements");
    for item in recs.enhancements {
        println!("  - {}", item);
    }

    println!("\nTop Positive Aspects");
    for aspect in insight.top_aspects {
        println!("  - {} {}: {}% positive reviews", aspect.icon, aspect.label, aspect.share);
    }

    println!("\nCommon Complaints");
    for complaint in insight.complaints {
        println!(
            "  - {} {}: {}% negative mentions",
            complaint.icon, complaint.label, complaint.share
        );
    }

    println!("\nResearch Insights");
    println!("  {}", recs.research);
    Ok(())
}
