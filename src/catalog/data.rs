//! Compiled-in reference tables: parks, features, and visitor reviews
//!
//! The dashboard ships its dataset as compile-time constants. Twelve parks,
//! eight features, and twenty curated reviews; sentiment shares are
//! pre-baked percentages, not computed at runtime. Every share triple sums
//! to exactly 100, which the catalog tests assert.

use super::types::{FeatureRecord, ParkRecord, ReviewRecord, Sentiment, SentimentShares};

// ============================================================================
// PARKS
// ============================================================================

/// All parks tracked by the dashboard, in canonical catalog order.
///
/// Catalog order is load-bearing: it breaks ties in rankings and fixes the
/// ordering of chart labels.
pub const PARKS: &[ParkRecord] = &[
    ParkRecord { name: "Yellowstone", shares: SentimentShares::new(78, 22, 0), url: "https://www.nps.gov/yell/index.htm", icon: "🏞️" },
    ParkRecord { name: "Yosemite", shares: SentimentShares::new(85, 15, 0), url: "https://www.nps.gov/yose/index.htm", icon: "⛰️" },
    ParkRecord { name: "Grand Canyon", shares: SentimentShares::new(92, 8, 0), url: "https://www.nps.gov/grca/index.htm", icon: "🏜️" },
    ParkRecord { name: "Zion", shares: SentimentShares::new(70, 30, 0), url: "https://www.nps.gov/zion/index.htm", icon: "🪨" },
    ParkRecord { name: "Big Bend", shares: SentimentShares::new(82, 12, 6), url: "https://www.nps.gov/bibe/index.htm", icon: "🌋" },
    ParkRecord { name: "Black Canyon", shares: SentimentShares::new(75, 20, 5), url: "https://www.nps.gov/blca/index.htm", icon: "🏔️" },
    ParkRecord { name: "Biscayne", shares: SentimentShares::new(68, 25, 7), url: "https://www.nps.gov/bisc/index.htm", icon: "🌊" },
    ParkRecord { name: "Hot Springs", shares: SentimentShares::new(72, 18, 10), url: "https://www.nps.gov/hosp/index.htm", icon: "🌡️" },
    ParkRecord { name: "Independence", shares: SentimentShares::new(88, 10, 2), url: "https://www.nps.gov/inde/index.htm", icon: "🏛️" },
    ParkRecord { name: "Valley Forge", shares: SentimentShares::new(80, 15, 5), url: "https://www.nps.gov/vafo/index.htm", icon: "⚔️" },
    ParkRecord { name: "Dry Tortugas", shares: SentimentShares::new(95, 4, 1), url: "https://www.nps.gov/drto/index.htm", icon: "🏝️" },
    ParkRecord { name: "Everglades", shares: SentimentShares::new(84, 12, 4), url: "https://www.nps.gov/ever/index.htm", icon: "🐊" },
];

// ============================================================================
// FEATURES
// ============================================================================

/// All reviewable features, in canonical catalog order.
pub const FEATURES: &[FeatureRecord] = &[
    FeatureRecord { name: "Hiking", shares: SentimentShares::new(65, 35, 0), icon: "🥾" },
    FeatureRecord { name: "Camping", shares: SentimentShares::new(58, 42, 0), icon: "🏕️" },
    FeatureRecord { name: "Scenery", shares: SentimentShares::new(95, 5, 0), icon: "🌄" },
    FeatureRecord { name: "Wildlife", shares: SentimentShares::new(82, 18, 0), icon: "🐻" },
    FeatureRecord { name: "Facilities", shares: SentimentShares::new(45, 48, 7), icon: "🚻" },
    FeatureRecord { name: "Crowds", shares: SentimentShares::new(30, 65, 5), icon: "👨‍👩‍👧‍👦" },
    FeatureRecord { name: "Fees", shares: SentimentShares::new(35, 60, 5), icon: "💵" },
    FeatureRecord { name: "Parking", shares: SentimentShares::new(40, 55, 5), icon: "🅿️" },
];

// ============================================================================
// REVIEWS
// ============================================================================

/// Curated visitor reviews in insertion order.
///
/// Insertion order is the order the dashboard renders the feed in, so the
/// filter must preserve it.
pub const REVIEWS: &[ReviewRecord] = &[
    ReviewRecord {
        park: "Yellowstone", feature: "Wildlife", sentiment: Sentiment::Positive,
        text: "Amazing wildlife sightings including bears and wolves!",
        park_icon: "🏞️", feature_icon: "🐻",
    },
    ReviewRecord {
        park: "Grand Canyon", feature: "Scenery", sentiment: Sentiment::Positive,
        text: "Most breathtaking views I've ever experienced!",
        park_icon: "🏜️", feature_icon: "🌄",
    },
    ReviewRecord {
        park: "Yosemite", feature: "Hiking", sentiment: Sentiment::Positive,
        text: "The trails offer incredible variety and challenge for all skill levels.",
        park_icon: "⛰️", feature_icon: "🥾",
    },
    ReviewRecord {
        park: "Zion", feature: "Camping", sentiment: Sentiment::Negative,
        text: "Campgrounds were overcrowded and facilities needed maintenance.",
        park_icon: "🪨", feature_icon: "🏕️",
    },
    ReviewRecord {
        park: "Big Bend", feature: "Scenery", sentiment: Sentiment::Positive,
        text: "The desert and mountain landscapes are stunning, especially at sunset.",
        park_icon: "🌋", feature_icon: "🌄",
    },
    ReviewRecord {
        park: "Black Canyon", feature: "Hiking", sentiment: Sentiment::Positive,
        text: "The rim trails offer vertigo-inducing views that are worth every step!",
        park_icon: "🏔️", feature_icon: "🥾",
    },
    ReviewRecord {
        park: "Biscayne", feature: "Wildlife", sentiment: Sentiment::Positive,
        text: "Snorkeling here was incredible - so many colorful fish and coral formations.",
        park_icon: "🌊", feature_icon: "🐻",
    },
    ReviewRecord {
        park: "Hot Springs", feature: "Facilities", sentiment: Sentiment::Neutral,
        text: "The bathhouses are historic but could use some modern updates.",
        park_icon: "🌡️", feature_icon: "🚻",
    },
    ReviewRecord {
        park: "Independence", feature: "Scenery", sentiment: Sentiment::Positive,
        text: "Walking through history with beautifully preserved buildings and monuments.",
        park_icon: "🏛️", feature_icon: "🌄",
    },
    ReviewRecord {
        park: "Valley Forge", feature: "Crowds", sentiment: Sentiment::Negative,
        text: "Too many people on weekends made it difficult to enjoy the historical sites.",
        park_icon: "⚔️", feature_icon: "👨‍👩‍👧‍👦",
    },
    ReviewRecord {
        park: "Dry Tortugas", feature: "Wildlife", sentiment: Sentiment::Positive,
        text: "The sea turtles and reef fish were abundant and the water clarity was perfect!",
        park_icon: "🏝️", feature_icon: "🐻",
    },
    ReviewRecord {
        park: "Everglades", feature: "Wildlife", sentiment: Sentiment::Positive,
        text: "Saw countless alligators, beautiful birds, and even a rare Florida panther from a distance!",
        park_icon: "🐊", feature_icon: "🐻",
    },
    ReviewRecord {
        park: "Yellowstone", feature: "Facilities", sentiment: Sentiment::Negative,
        text: "Restrooms were poorly maintained and often out of supplies.",
        park_icon: "🏞️", feature_icon: "🚻",
    },
    ReviewRecord {
        park: "Grand Canyon", feature: "Fees", sentiment: Sentiment::Negative,
        text: "Entry price is too steep for families, especially with additional parking costs.",
        park_icon: "🏜️", feature_icon: "💵",
    },
    ReviewRecord {
        park: "Yosemite", feature: "Parking", sentiment: Sentiment::Negative,
        text: "Impossible to find parking near popular trailheads after 9am.",
        park_icon: "⛰️", feature_icon: "🅿️",
    },
    ReviewRecord {
        park: "Zion", feature: "Crowds", sentiment: Sentiment::Negative,
        text: "Angels Landing was so crowded it felt dangerous on narrow sections.",
        park_icon: "🪨", feature_icon: "👨‍👩‍👧‍👦",
    },
    ReviewRecord {
        park: "Big Bend", feature: "Camping", sentiment: Sentiment::Positive,
        text: "Chisos Basin campground has some of the best stargazing in the country!",
        park_icon: "🌋", feature_icon: "🏕️",
    },
    ReviewRecord {
        park: "Black Canyon", feature: "Fees", sentiment: Sentiment::Neutral,
        text: "The entrance fee is reasonable considering the amazing views.",
        park_icon: "🏔️", feature_icon: "💵",
    },
    ReviewRecord {
        park: "Biscayne", feature: "Camping", sentiment: Sentiment::Positive,
        text: "Camping on Boca Chita Key was a unique and peaceful experience.",
        park_icon: "🌊", feature_icon: "🏕️",
    },
    ReviewRecord {
        park: "Hot Springs", feature: "Hiking", sentiment: Sentiment::Positive,
        text: "The Hot Springs Mountain Trail offers beautiful forest views and historic sites.",
        park_icon: "🌡️", feature_icon: "🥾",
    },
];
