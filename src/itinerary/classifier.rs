//! Activity classification and label formatting for itinerary lines
//!
//! These helpers only decide how a line is presented (icon, label, content);
//! they never change what the parser produced.

use serde::{Deserialize, Serialize};

use super::labels::CategoryLabel;

/// Display category of a single itinerary line
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Breakfast,
    Lunch,
    Dinner,
    Lodging,
    Transit,
    Sightseeing,
    Leisure,
    Shopping,
    Morning,
    Afternoon,
    Evening,
    Night,
    General,
}

/// Keyword groups in priority order; the first group with a hit wins.
const KEYWORD_RULES: &[(&[&str], ActivityKind)] = &[
    (&["breakfast", "brunch"], ActivityKind::Breakfast),
    (&["lunch"], ActivityKind::Lunch),
    (&["dinner", "supper"], ActivityKind::Dinner),
    (
        &["hotel", "stay", "check-in", "check in", "accommodation"],
        ActivityKind::Lodging,
    ),
    (&["flight", "airport", "arrive", "depart"], ActivityKind::Transit),
    (
        &[
            "explore",
            "visit",
            "sightseeing",
            "tour",
            "museum",
            "fort",
            "palace",
        ],
        ActivityKind::Sightseeing,
    ),
    (&["relax", "leisure", "beach"], ActivityKind::Leisure),
    (&["shop", "market"], ActivityKind::Shopping),
];

impl ActivityKind {
    /// Icon name (lucide icon set) used by the front end
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Breakfast => "coffee",
            Self::Lunch => "utensils",
            Self::Dinner => "chef-hat",
            Self::Lodging => "hotel",
            Self::Transit => "plane",
            Self::Sightseeing | Self::General => "map-pin",
            Self::Leisure | Self::Morning | Self::Afternoon => "sun",
            Self::Shopping => "wallet",
            Self::Evening => "sunset",
            Self::Night => "moon",
        }
    }

    fn from_time_of_day(label: CategoryLabel) -> Option<Self> {
        match label {
            CategoryLabel::Morning => Some(Self::Morning),
            CategoryLabel::Afternoon => Some(Self::Afternoon),
            CategoryLabel::Evening => Some(Self::Evening),
            CategoryLabel::Night => Some(Self::Night),
            _ => None,
        }
    }
}

/// Classify a line by keywords, falling back to its time-of-day label.
#[must_use]
pub fn classify_activity(line: &str) -> ActivityKind {
    let text = line.trim().to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, kind)| *kind)
        .or_else(|| CategoryLabel::detect(&text).and_then(ActivityKind::from_time_of_day))
        .unwrap_or(ActivityKind::General)
}

/// A line split into its leading label and the remaining content
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub label: Option<CategoryLabel>,
    pub content: String,
}

/// Split a recognised `Label:` prefix off a line and drop `**` emphasis.
#[must_use]
pub fn format_label(line: &str) -> FormattedLine {
    let clean = line.replace("**", "");
    let clean = clean.trim();

    match CategoryLabel::split_prefix(clean) {
        Some((label, rest)) => FormattedLine {
            label: Some(label),
            content: rest.trim().to_string(),
        },
        None => FormattedLine {
            label: None,
            content: clean.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Morning: Breakfast at the hotel", ActivityKind::Breakfast)]
    #[case("Sunday brunch by the lake", ActivityKind::Breakfast)]
    #[case("Afternoon: Lunch near the fort", ActivityKind::Lunch)]
    #[case("Evening: Dinner cruise", ActivityKind::Dinner)]
    #[case("Light supper", ActivityKind::Dinner)]
    #[case("Check-in at Taj Lake Palace", ActivityKind::Lodging)]
    #[case("Overnight stay in a houseboat", ActivityKind::Lodging)]
    #[case("Arrive at Jaipur airport", ActivityKind::Transit)]
    #[case("Depart for Delhi", ActivityKind::Transit)]
    #[case("Explore Amber Fort", ActivityKind::Sightseeing)]
    #[case("Guided tour of the old city", ActivityKind::Sightseeing)]
    #[case("Relax on Palolem beach", ActivityKind::Leisure)]
    #[case("Shopping at Johari Bazaar", ActivityKind::Shopping)]
    #[case("Spice market walk", ActivityKind::Shopping)]
    #[case("Morning: Yoga session", ActivityKind::Morning)]
    #[case("afternoon: Cooking class", ActivityKind::Afternoon)]
    #[case("Evening: Aarti ceremony", ActivityKind::Evening)]
    #[case("NIGHT: Stargazing", ActivityKind::Night)]
    #[case("Kathakali performance", ActivityKind::General)]
    #[case("", ActivityKind::General)]
    fn test_classify_activity(#[case] line: &str, #[case] expected: ActivityKind) {
        assert_eq!(classify_activity(line), expected);
    }

    #[test]
    fn test_meal_keywords_win_over_places() {
        // "hotel" and "palace" would match later groups
        assert_eq!(
            classify_activity("Dinner at the palace hotel"),
            ActivityKind::Dinner
        );
    }

    #[test]
    fn test_lodging_wins_over_sightseeing() {
        assert_eq!(
            classify_activity("Visit the hotel rooftop"),
            ActivityKind::Lodging
        );
    }

    #[rstest]
    #[case("Morning: Visit fort", Some(CategoryLabel::Morning), "Visit fort")]
    #[case("**Evening:** Sunset at **Marine Drive**", Some(CategoryLabel::Evening), "Sunset at Marine Drive")]
    #[case("travel tip: Carry water", Some(CategoryLabel::TravelTip), "Carry water")]
    #[case("  Accommodation:Hotel X  ", Some(CategoryLabel::Accommodation), "Hotel X")]
    #[case("  Relax at the beach ", None, "Relax at the beach")]
    #[case("Note: bring cash", None, "Note: bring cash")]
    fn test_format_label(
        #[case] line: &str,
        #[case] label: Option<CategoryLabel>,
        #[case] content: &str,
    ) {
        let formatted = format_label(line);
        assert_eq!(formatted.label, label);
        assert_eq!(formatted.content, content);
    }

    #[test]
    fn test_icons() {
        assert_eq!(ActivityKind::Dinner.icon(), "chef-hat");
        assert_eq!(ActivityKind::Night.icon(), "moon");
        assert_eq!(ActivityKind::General.icon(), "map-pin");
    }
}
