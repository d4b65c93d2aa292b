//! Category labels that prefix itinerary lines ("Morning:", "Dining:", ...)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognised line label
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLabel {
    Morning,
    Afternoon,
    Evening,
    Night,
    Accommodation,
    Dining,
    TravelTip,
}

impl CategoryLabel {
    pub const ALL: [CategoryLabel; 7] = [
        CategoryLabel::Morning,
        CategoryLabel::Afternoon,
        CategoryLabel::Evening,
        CategoryLabel::Night,
        CategoryLabel::Accommodation,
        CategoryLabel::Dining,
        CategoryLabel::TravelTip,
    ];

    /// Display name as written in itinerary text
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
            Self::Accommodation => "Accommodation",
            Self::Dining => "Dining",
            Self::TravelTip => "Travel Tip",
        }
    }

    /// Lowercase prefix including the colon
    const fn prefix(self) -> &'static str {
        match self {
            Self::Morning => "morning:",
            Self::Afternoon => "afternoon:",
            Self::Evening => "evening:",
            Self::Night => "night:",
            Self::Accommodation => "accommodation:",
            Self::Dining => "dining:",
            Self::TravelTip => "travel tip:",
        }
    }

    /// Morning, afternoon, evening or night
    #[must_use]
    pub const fn is_time_of_day(self) -> bool {
        matches!(
            self,
            Self::Morning | Self::Afternoon | Self::Evening | Self::Night
        )
    }

    /// Split a leading `Label:` off `line`, ignoring case.
    ///
    /// Returns the label and the text after the colon (untrimmed). The line must
    /// start with the label; leading whitespace is not skipped.
    #[must_use]
    pub fn split_prefix(line: &str) -> Option<(CategoryLabel, &str)> {
        Self::ALL.into_iter().find_map(|label| {
            let prefix = label.prefix();
            line.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| (label, &line[prefix.len()..]))
        })
    }

    /// Label at the start of `line`, if any
    #[must_use]
    pub fn detect(line: &str) -> Option<CategoryLabel> {
        Self::split_prefix(line).map(|(label, _)| label)
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Morning: Visit fort", CategoryLabel::Morning, " Visit fort")]
    #[case("AFTERNOON:lunch", CategoryLabel::Afternoon, "lunch")]
    #[case("evening: Sunset cruise", CategoryLabel::Evening, " Sunset cruise")]
    #[case("Night: Stargazing", CategoryLabel::Night, " Stargazing")]
    #[case("Accommodation: Hotel X", CategoryLabel::Accommodation, " Hotel X")]
    #[case("dining: Thali", CategoryLabel::Dining, " Thali")]
    #[case("Travel tip: Carry water", CategoryLabel::TravelTip, " Carry water")]
    fn test_split_prefix(
        #[case] line: &str,
        #[case] label: CategoryLabel,
        #[case] rest: &str,
    ) {
        assert_eq!(CategoryLabel::split_prefix(line), Some((label, rest)));
    }

    #[rstest]
    #[case("Mornings are cool")]
    #[case("Morning - visit fort")]
    #[case(" Morning: leading space")]
    #[case("Travel Tips: plural")]
    #[case("")]
    #[case("é")]
    fn test_no_label(#[case] line: &str) {
        assert_eq!(CategoryLabel::detect(line), None);
    }

    #[test]
    fn test_time_of_day() {
        let times: Vec<_> = CategoryLabel::ALL
            .into_iter()
            .filter(|label| label.is_time_of_day())
            .collect();
        assert_eq!(times.len(), 4);
        assert!(!CategoryLabel::TravelTip.is_time_of_day());
    }

    #[test]
    fn test_display_uses_written_form() {
        assert_eq!(CategoryLabel::TravelTip.to_string(), "Travel Tip");
    }
}
