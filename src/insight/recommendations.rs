//! Per-park recommendation table
//!
//! Static improvement/enhancement/research blocks distilled from sentiment
//! research on visitor reviews. One record per park plus the synthetic
//! "All Parks" aggregate; `recommendation_for` is total and falls back to
//! that aggregate for unknown keys.

use crate::catalog::{RecommendationRecord, ALL_PARKS};

/// All recommendation records, one per park plus the "All Parks" aggregate.
pub const RECOMMENDATIONS: &[RecommendationRecord] = &[
    RecommendationRecord {
        park: "Yellowstone",
        improvements: &[
            "Increase wildlife protection zones and viewing platforms 🦬",
            "Improve facility maintenance schedules for restrooms 🚽",
            "Implement traffic management system during peak seasons 🚦",
        ],
        enhancements: &[
            "Expand guided wolf watching programs 🐺",
            "Create virtual reality geyser experiences 🌋",
            "Develop wildlife tracking apps for visitors 📱",
        ],
        research: "Research shows visitors highly value wildlife viewing experiences in Yellowstone, with social media posts demonstrating positive emotional responses to wildlife sightings.",
    },
    RecommendationRecord {
        park: "Yosemite",
        improvements: &[
            "Implement reservations for popular trails 🥾",
            "Increase shuttle service frequency 🚌",
            "Expand parking capacity at main trailheads 🅿️",
        ],
        enhancements: &[
            "Create more climbing programs for beginners 🧗",
            "Develop stargazing observation points ✨",
            "Add more interpretive hiking trails 🪧",
        ],
        research: "Studies indicate visitors to Yosemite express high satisfaction with scenic beauty but frustration with parking and crowding issues during peak seasons.",
    },
    RecommendationRecord {
        park: "Grand Canyon",
        improvements: &[
            "Expand shade structures at viewpoints ⛱️",
            "Increase water refill stations on trails 💧",
            "Implement tiered pricing structure for different access levels 💰",
        ],
        enhancements: &[
            "Create accessible viewpoints for visitors with disabilities ♿",
            "Develop geology-focused educational programs 🪨",
            "Install time-lapse cameras for erosion education 📷",
        ],
        research: "Analysis of visitor reviews shows extremely high positive sentiment regarding Grand Canyon's scenery, but concerns about fees and facilities.",
    },
    RecommendationRecord {
        park: "Zion",
        improvements: &[
            "Redesign shuttle loading areas to reduce wait times ⏱️",
            "Renovate restroom facilities parkwide 🚻",
            "Implement digital permits for popular hikes to reduce crowding 📲",
        ],
        enhancements: &[
            "Create flash flood awareness programs 🌊",
            "Develop night sky observation areas 🌌",
            "Add more family-friendly short trail options 👨‍👩‍👧‍👦",
        ],
        research: "Sentiment analysis reveals visitor frustration with crowding on popular trails like Angels Landing and concerns about safety in narrow sections.",
    },
    RecommendationRecord {
        park: "Big Bend",
        improvements: &[
            "Improve cellular coverage in emergency areas 📶",
            "Increase water availability at remote trailheads 🚰",
            "Enhance road maintenance in remote areas 🛣️",
        ],
        enhancements: &[
            "Develop dark sky viewing platforms with telescopes 🔭",
            "Create desert ecology educational programs 🌵",
            "Expand guided border culture experiences 🏜️",
        ],
        research: "Reviews highlight exceptional stargazing opportunities and desert landscapes, with neutral to positive sentiment about remote camping experiences.",
    },
    RecommendationRecord {
        park: "Black Canyon",
        improvements: &[
            "Add safety railings at selected viewpoints 🚧",
            "Improve trail marking for difficulty levels 🥾",
            "Expand visitor center educational displays 🏫",
        ],
        enhancements: &[
            "Create guided geology tours 🪨",
            "Develop photography workshops focused on canyon lighting 📸",
            "Add more intermediate hiking options 🏞️",
        ],
        research: "Visitor sentiment shows strong positive reactions to dramatic views but concerns about trail safety and clarity of difficulty ratings.",
    },
    RecommendationRecord {
        park: "Biscayne",
        improvements: &[
            "Enhance boat launch facilities ⛵",
            "Improve reef protection markers 🪸",
            "Increase water quality monitoring 🔍",
        ],
        enhancements: &[
            "Expand guided snorkeling tours with marine biologists 🐠",
            "Create underwater photography programs 📷",
            "Develop coral reef conservation education 🐡",
        ],
        research: "Analysis of reviews indicates high satisfaction with marine wildlife viewing but some concerns about facility maintenance and accessibility.",
    },
    RecommendationRecord {
        park: "Hot Springs",
        improvements: &[
            "Modernize historic bathhouse facilities while preserving character 🏛️",
            "Create more seating areas along promenade 🪑",
            "Improve accessibility options for mobility-limited visitors ♿",
        ],
        enhancements: &[
            "Develop interactive exhibits on thermal water science ♨️",
            "Create historical reenactments of 1920s spa culture 🕰️",
            "Expand wellness programs using natural springs 💆",
        ],
        research: "Sentiment analysis shows mixed opinions about facilities, with positive reactions to historical aspects but desire for modernization of amenities.",
    },
    RecommendationRecord {
        park: "Independence",
        improvements: &[
            "Reduce queue times at Liberty Bell with timed entries ⏳",
            "Enhance signage for self-guided history tours 🪧",
            "Improve accessibility for historic buildings ♿",
        ],
        enhancements: &[
            "Create augmented reality historical experiences 📱",
            "Develop interactive constitutional history programs 📜",
            "Expand living history demonstrations 🎭",
        ],
        research: "Visitors express highly positive sentiment about historical significance and preservation, with suggestions for enhanced interpretive experiences.",
    },
    RecommendationRecord {
        park: "Valley Forge",
        improvements: &[
            "Implement weekend crowd management strategies 👥",
            "Expand parking at popular monuments 🅿️",
            "Create more rest areas along hiking trails 🪑",
        ],
        enhancements: &[
            "Develop Revolutionary War reenactments ⚔️",
            "Create military strategy educational programs 🗺️",
            "Expand winter encampment living history exhibits ❄️",
        ],
        research: "Review analysis indicates concerns about weekend crowding affecting visitor experience at historical monuments.",
    },
    RecommendationRecord {
        park: "Dry Tortugas",
        improvements: &[
            "Increase frequency of ferry service ⛴️",
            "Enhance camping reservations system ⛺",
            "Improve weather shelter facilities ⛈️",
        ],
        enhancements: &[
            "Expand guided snorkeling programs 🤿",
            "Create night sky viewing events 🌠",
            "Develop marine conservation education 🐬",
        ],
        research: "Extremely high positive sentiment in visitor reviews, especially regarding marine wildlife and remote island experience quality.",
    },
    RecommendationRecord {
        park: "Everglades",
        improvements: &[
            "Enhance mosquito management during peak seasons 🦟",
            "Improve accessibility of wilderness waterways 🛶",
            "Create more elevated boardwalks for wildlife viewing 👀",
        ],
        enhancements: &[
            "Develop guided night expeditions 🌙",
            "Create ecosystem restoration education programs 🌿",
            "Expand photography blinds for wildlife viewing 📸",
        ],
        research: "Social media sentiment analysis shows strong positive emotions related to wildlife sightings, especially birds and alligators.",
    },
    RecommendationRecord {
        park: ALL_PARKS,
        improvements: &[
            "Implement timed entry systems to reduce crowding ⏱️",
            "Increase maintenance frequency for restroom facilities 🧹",
            "Consider tiered pricing options 💰",
        ],
        enhancements: &[
            "Develop more wildlife viewing programs 🦉",
            "Add panoramic viewpoint installations 🌅",
            "Create interactive educational displays 📚",
        ],
        research: "Research across multiple parks shows visitors generally express positive sentiment, with joy and anticipation being common emotions in social media posts about park visits.",
    },
];

/// Recommendation record for the aggregate "All Parks" view.
pub fn overall_recommendation() -> &'static RecommendationRecord {
    // The aggregate record always exists; asserted in tests
    RECOMMENDATIONS
        .iter()
        .find(|r| r.park == ALL_PARKS)
        .unwrap_or(&RECOMMENDATIONS[0])
}

/// Look up the recommendation record for a park.
///
/// Total function: an unknown park name returns the "All Parks" aggregate
/// record rather than failing.
pub fn recommendation_for(park: &str) -> &'static RecommendationRecord {
    RECOMMENDATIONS
        .iter()
        .find(|r| r.park == park)
        .unwrap_or_else(|| overall_recommendation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_every_park_has_a_record() {
        let catalog = Catalog::global();
        for park in catalog.parks() {
            assert_eq!(recommendation_for(park.name).park, park.name);
        }
    }

    #[test]
    fn test_table_has_aggregate_record() {
        assert_eq!(RECOMMENDATIONS.len(), 13);
        assert_eq!(overall_recommendation().park, ALL_PARKS);
    }

    #[test]
    fn test_unknown_park_falls_back_to_aggregate() {
        let fallback = recommendation_for("Nonexistent Park");
        assert_eq!(fallback, overall_recommendation());
        assert_eq!(recommendation_for(ALL_PARKS), fallback);
    }

    #[test]
    fn test_records_are_fully_populated() {
        for record in RECOMMENDATIONS {
            assert_eq!(record.improvements.len(), 3, "park {}", record.park);
            assert_eq!(record.enhancements.len(), 3, "park {}", record.park);
            assert!(!record.research.is_empty(), "park {}", record.park);
        }
    }
}
