//! Structured representation of one itinerary day

use serde::{Deserialize, Serialize};

/// One day of a parsed itinerary.
///
/// Every non-blank line of a day's section ends up in exactly one of
/// `overview`, `activities`, `accommodation`, `dining` or `travel_tips`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// Day number taken from the "Day N" marker, or assigned sequentially
    pub day_number: u32,
    /// Short theme line for the day
    pub overview: Option<String>,
    /// Activity and detail lines in source order; time-of-day labels are kept
    pub activities: Vec<String>,
    /// Lodging suggestions with the "Accommodation:" label removed
    pub accommodation: Vec<String>,
    /// Meal suggestions with the "Dining:" label removed
    pub dining: Vec<String>,
    /// Practical tips with the "Travel Tip:" label removed
    pub travel_tips: Vec<String>,
}

impl DayRecord {
    /// Create an empty record for the given day
    #[must_use]
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            overview: None,
            activities: Vec::new(),
            accommodation: Vec::new(),
            dining: Vec::new(),
            travel_tips: Vec::new(),
        }
    }

    /// Number of classified lines, overview included
    #[must_use]
    pub fn line_count(&self) -> usize {
        usize::from(self.overview.is_some())
            + self.activities.len()
            + self.accommodation.len()
            + self.dining.len()
            + self.travel_tips.len()
    }

    /// True when the day carries no content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }
}
