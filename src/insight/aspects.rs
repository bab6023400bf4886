//! Per-park insight panels: top positive aspects and common complaints
//!
//! One lookup table keyed by park name, mirroring the recommendation
//! table. The "All Parks" record carries the cross-park aggregates and
//! doubles as the fallback for unknown keys.

use crate::catalog::{AspectMention, ParkInsight, ALL_PARKS};

/// All insight records, one per park plus the "All Parks" aggregate.
pub const INSIGHTS: &[ParkInsight] = &[
    ParkInsight {
        park: "Yellowstone",
        top_aspects: &[
            AspectMention { label: "Wildlife", icon: "🐻", share: 92 },
            AspectMention { label: "Geysers", icon: "🌋", share: 88 },
            AspectMention { label: "Hiking Trails", icon: "🥾", share: 75 },
        ],
        complaints: &[
            AspectMention { label: "Crowds", icon: "👥", share: 75 },
            AspectMention { label: "Traffic", icon: "🚗", share: 65 },
            AspectMention { label: "Lodging Availability", icon: "🏨", share: 60 },
        ],
    },
    ParkInsight {
        park: "Yosemite",
        top_aspects: &[
            AspectMention { label: "Waterfalls", icon: "🌊", share: 96 },
            AspectMention { label: "Hiking", icon: "🥾", share: 90 },
            AspectMention { label: "Forests", icon: "🌲", share: 85 },
        ],
        complaints: &[
            AspectMention { label: "Parking", icon: "🅿️", share: 80 },
            AspectMention { label: "Valley Crowds", icon: "👥", share: 70 },
            AspectMention { label: "Campsite Reservations", icon: "⛺", share: 65 },
        ],
    },
    ParkInsight {
        park: "Grand Canyon",
        top_aspects: &[
            AspectMention { label: "Scenery", icon: "🌄", share: 98 },
            AspectMention { label: "Rim Trails", icon: "🥾", share: 90 },
            AspectMention { label: "Viewpoints", icon: "👀", share: 85 },
        ],
        complaints: &[
            AspectMention { label: "Summer Heat", icon: "☀️", share: 70 },
            AspectMention { label: "Tour Prices", icon: "💰", share: 60 },
            AspectMention { label: "Shuttle Waits", icon: "⏱️", share: 55 },
        ],
    },
    ParkInsight {
        park: "Zion",
        top_aspects: &[
            AspectMention { label: "Narrows", icon: "🏞️", share: 92 },
            AspectMention { label: "Angels Landing", icon: "😇", share: 85 },
            AspectMention { label: "Scenery", icon: "🌅", share: 80 },
        ],
        complaints: &[
            AspectMention { label: "Shuttle System", icon: "🚌", share: 80 },
            AspectMention { label: "Crowds", icon: "👥", share: 75 },
            AspectMention { label: "Trail Safety", icon: "⚠️", share: 60 },
            AspectMention { label: "Parking Availability", icon: "🅿️", share: 55 },
        ],
    },
    ParkInsight {
        park: "Big Bend",
        top_aspects: &[
            AspectMention { label: "Night Skies", icon: "🌌", share: 95 },
            AspectMention { label: "Desert Views", icon: "🏜️", share: 90 },
            AspectMention { label: "Mountain Trails", icon: "⛰️", share: 85 },
        ],
        complaints: &[
            AspectMention { label: "Remote Location", icon: "🏜️", share: 70 },
            AspectMention { label: "Lack of Services", icon: "🏪", share: 65 },
            AspectMention { label: "Extreme Temperatures", icon: "🌡️", share: 60 },
        ],
    },
    ParkInsight {
        park: "Black Canyon",
        top_aspects: &[
            AspectMention { label: "Canyon Views", icon: "🏞️", share: 96 },
            AspectMention { label: "Photography", icon: "📸", share: 88 },
            AspectMention { label: "Rim Trails", icon: "🥾", share: 82 },
        ],
        complaints: &[
            AspectMention { label: "Limited Accessibility", icon: "♿", share: 75 },
            AspectMention { label: "Steep Trails", icon: "⚠️", share: 65 },
            AspectMention { label: "Weather Variability", icon: "⛈️", share: 55 },
        ],
    },
    ParkInsight {
        park: "Biscayne",
        top_aspects: &[
            AspectMention { label: "Snorkeling", icon: "🤿", share: 94 },
            AspectMention { label: "Boating", icon: "⛵", share: 88 },
            AspectMention { label: "Marine Life", icon: "🐠", share: 86 },
        ],
        complaints: &[
            AspectMention { label: "Boat Access Only", icon: "⛵", share: 80 },
            AspectMention { label: "Mosquitoes", icon: "🦟", share: 70 },
            AspectMention { label: "Limited Facilities", icon: "🚻", share: 60 },
        ],
    },
    ParkInsight {
        park: "Hot Springs",
        top_aspects: &[
            AspectMention { label: "Thermal Waters", icon: "♨️", share: 95 },
            AspectMention { label: "Historic Buildings", icon: "🏛️", share: 85 },
            AspectMention { label: "Health Benefits", icon: "💆", share: 80 },
        ],
        complaints: &[
            AspectMention { label: "Aging Facilities", icon: "🏚️", share: 75 },
            AspectMention { label: "Limited Parking", icon: "🅿️", share: 65 },
            AspectMention { label: "Commercialization", icon: "💰", share: 55 },
        ],
    },
    ParkInsight {
        park: "Independence",
        top_aspects: &[
            AspectMention { label: "Historical Significance", icon: "🏛️", share: 95 },
            AspectMention { label: "Liberty Bell", icon: "🔔", share: 92 },
            AspectMention { label: "Architecture", icon: "🏛️", share: 88 },
        ],
        complaints: &[
            AspectMention { label: "Urban Setting", icon: "🏙️", share: 70 },
            AspectMention { label: "Wait Times", icon: "⏳", share: 65 },
            AspectMention { label: "Noise Levels", icon: "🔊", share: 55 },
        ],
    },
    ParkInsight {
        park: "Valley Forge",
        top_aspects: &[
            AspectMention { label: "Historical Significance", icon: "⚔️", share: 92 },
            AspectMention { label: "Memorial Monuments", icon: "🗿", share: 85 },
            AspectMention { label: "Walking Trails", icon: "🚶", share: 80 },
        ],
        complaints: &[
            AspectMention { label: "Weekend Crowds", icon: "👥", share: 80 },
            AspectMention { label: "Limited Shade", icon: "☀️", share: 70 },
            AspectMention { label: "Trail Maintenance", icon: "🚧", share: 55 },
        ],
    },
    ParkInsight {
        park: "Dry Tortugas",
        top_aspects: &[
            AspectMention { label: "Marine Life", icon: "🐠", share: 98 },
            AspectMention { label: "Fort Jefferson", icon: "🏰", share: 94 },
            AspectMention { label: "Snorkeling", icon: "🤿", share: 92 },
        ],
        complaints: &[
            AspectMention { label: "Ferry Costs", icon: "⛴️", share: 75 },
            AspectMention { label: "Weather Dependence", icon: "⛈️", share: 70 },
            AspectMention { label: "Limited Amenities", icon: "🏝️", share: 65 },
        ],
    },
    ParkInsight {
        park: "Everglades",
        top_aspects: &[
            AspectMention { label: "Wildlife Diversity", icon: "🐊", share: 95 },
            AspectMention { label: "Airboat Tours", icon: "🚤", share: 88 },
            AspectMention { label: "Bird Watching", icon: "🦅", share: 86 },
        ],
        complaints: &[
            AspectMention { label: "Mosquitoes", icon: "🦟", share: 85 },
            AspectMention { label: "Humidity", icon: "💦", share: 75 },
            AspectMention { label: "Limited Wildlife Sightings", icon: "👀", share: 55 },
        ],
    },
    ParkInsight {
        park: ALL_PARKS,
        top_aspects: &[
            AspectMention { label: "Scenery", icon: "🌄", share: 95 },
            AspectMention { label: "Wildlife", icon: "🦌", share: 82 },
            AspectMention { label: "Hiking Trails", icon: "🥾", share: 65 },
        ],
        complaints: &[
            AspectMention { label: "Crowds", icon: "👥", share: 75 },
            AspectMention { label: "Parking", icon: "🅿️", share: 70 },
            AspectMention { label: "Facilities", icon: "🚻", share: 65 },
            AspectMention { label: "Fees", icon: "💰", share: 60 },
        ],
    },
];

/// Insight record for the aggregate "All Parks" view.
pub fn overall_insight() -> &'static ParkInsight {
    INSIGHTS
        .iter()
        .find(|i| i.park == ALL_PARKS)
        .unwrap_or(&INSIGHTS[0])
}

/// Look up the insight record for a park.
///
/// Total function: an unknown park name returns the "All Parks" aggregate
/// record rather than failing.
pub fn insight_for(park: &str) -> &'static ParkInsight {
    INSIGHTS
        .iter()
        .find(|i| i.park == park)
        .unwrap_or_else(|| overall_insight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_every_park_has_a_record() {
        let catalog = Catalog::global();
        for park in catalog.parks() {
            assert_eq!(insight_for(park.name).park, park.name);
        }
        assert_eq!(INSIGHTS.len(), catalog.parks().len() + 1);
    }

    #[test]
    fn test_unknown_park_falls_back_to_aggregate() {
        assert_eq!(insight_for("Nonexistent Park"), overall_insight());
        assert_eq!(insight_for(ALL_PARKS), overall_insight());
    }

    #[test]
    fn test_panels_are_ordered_by_share() {
        for insight in INSIGHTS {
            let aspects: Vec<u8> = insight.top_aspects.iter().map(|a| a.share).collect();
            let mut sorted = aspects.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(aspects, sorted, "aspects out of order for {}", insight.park);

            let complaints: Vec<u8> = insight.complaints.iter().map(|c| c.share).collect();
            let mut sorted = complaints.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(complaints, sorted, "complaints out of order for {}", insight.park);
        }
    }

    #[test]
    fn test_panels_are_populated() {
        for insight in INSIGHTS {
            assert!(insight.top_aspects.len() >= 3, "park {}", insight.park);
            assert!(insight.complaints.len() >= 3, "park {}", insight.park);
        }
    }
}
