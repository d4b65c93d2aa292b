//! Trip preferences and planned trip results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DayRecord;
use crate::ItinerAiError;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;
pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 10;
pub const MIN_BUDGET: u64 = 5_000;
pub const MAX_BUDGET: u64 = 500_000;

/// Trip preferences collected from the user
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Destination name, e.g. "Jaipur"
    pub destination: String,
    /// Trip duration in days
    pub days: u32,
    /// Number of travelers
    pub people: u32,
    /// Total budget in Indian Rupees
    pub budget: u64,
}

impl TripRequest {
    /// Create a new trip request
    #[must_use]
    pub fn new(destination: impl Into<String>, days: u32, people: u32, budget: u64) -> Self {
        Self {
            destination: destination.into(),
            days,
            people,
            budget,
        }
    }

    /// Check the request against the ranges offered by the planning wizard
    pub fn validate(&self) -> crate::Result<()> {
        if self.destination.trim().is_empty() {
            return Err(ItinerAiError::validation("Please enter a destination."));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(ItinerAiError::validation(format!(
                "Trip duration must be between {MIN_DAYS} and {MAX_DAYS} days, got {}",
                self.days
            )));
        }
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&self.people) {
            return Err(ItinerAiError::validation(format!(
                "Number of people must be between {MIN_PEOPLE} and {MAX_PEOPLE}, got {}",
                self.people
            )));
        }
        if !(MIN_BUDGET..=MAX_BUDGET).contains(&self.budget) {
            return Err(ItinerAiError::validation(format!(
                "Budget must be between {MIN_BUDGET} and {MAX_BUDGET} INR, got {}",
                self.budget
            )));
        }
        Ok(())
    }

    /// Budget available per person and day, if the request has non-zero values
    #[must_use]
    pub fn budget_per_person_per_day(&self) -> Option<f64> {
        if self.days == 0 || self.people == 0 || self.budget == 0 {
            return None;
        }
        Some(self.budget as f64 / (f64::from(self.days) * f64::from(self.people)))
    }

    /// Accommodation class the budget allows for
    #[must_use]
    pub fn accommodation_tier(&self) -> AccommodationTier {
        self.budget_per_person_per_day()
            .map_or(AccommodationTier::NotSpecified, AccommodationTier::from_daily_budget)
    }
}

/// Accommodation class derived from the per-person daily budget
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationTier {
    LuxuryStays,
    PremiumHotels,
    MidRangeHotels,
    BudgetStays,
    BasicHostels,
    NotSpecified,
}

impl AccommodationTier {
    /// Classify a per-person, per-day budget in INR
    #[must_use]
    pub fn from_daily_budget(per_person_per_day: f64) -> Self {
        if per_person_per_day >= 8000.0 {
            Self::LuxuryStays
        } else if per_person_per_day >= 4000.0 {
            Self::PremiumHotels
        } else if per_person_per_day >= 1500.0 {
            Self::MidRangeHotels
        } else if per_person_per_day >= 500.0 {
            Self::BudgetStays
        } else {
            Self::BasicHostels
        }
    }
}

impl fmt::Display for AccommodationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LuxuryStays => "Luxury Stays",
            Self::PremiumHotels => "Premium Hotels",
            Self::MidRangeHotels => "Mid-Range Hotels",
            Self::BudgetStays => "Budget Stays",
            Self::BasicHostels => "Basic Hostels",
            Self::NotSpecified => "Not Specified",
        };
        f.write_str(text)
    }
}

/// A generated and parsed trip plan
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlannedTrip {
    pub destination: String,
    pub days: u32,
    pub people: u32,
    pub budget: u64,
    pub accommodation_tier: AccommodationTier,
    /// Raw text as returned by the generator
    pub raw_itinerary: String,
    /// Parsed day records
    pub itinerary: Vec<DayRecord>,
    /// General information that followed the last day
    pub general_notes: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_request() {
        let request = TripRequest::new("Goa", 5, 2, 25_000);
        assert!(request.validate().is_ok());
    }

    #[rstest]
    #[case(TripRequest::new("   ", 5, 2, 25_000), "destination")]
    #[case(TripRequest::new("Goa", 0, 2, 25_000), "duration")]
    #[case(TripRequest::new("Goa", 31, 2, 25_000), "duration")]
    #[case(TripRequest::new("Goa", 5, 11, 25_000), "people")]
    #[case(TripRequest::new("Goa", 5, 2, 4_999), "Budget")]
    #[case(TripRequest::new("Goa", 5, 2, 500_001), "Budget")]
    fn test_invalid_requests(#[case] request: TripRequest, #[case] needle: &str) {
        let err = request.validate().unwrap_err();
        assert!(matches!(err, ItinerAiError::Validation { .. }));
        assert!(err.to_string().contains(needle), "{err}");
    }

    #[rstest]
    #[case(160_000, 5, 4, AccommodationTier::LuxuryStays)]
    #[case(40_000, 5, 2, AccommodationTier::PremiumHotels)]
    #[case(25_000, 5, 2, AccommodationTier::MidRangeHotels)]
    #[case(10_000, 5, 2, AccommodationTier::BudgetStays)]
    #[case(5_000, 5, 4, AccommodationTier::BasicHostels)]
    #[case(25_000, 0, 2, AccommodationTier::NotSpecified)]
    fn test_accommodation_tier(
        #[case] budget: u64,
        #[case] days: u32,
        #[case] people: u32,
        #[case] expected: AccommodationTier,
    ) {
        let request = TripRequest::new("Jaipur", days, people, budget);
        assert_eq!(request.accommodation_tier(), expected);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(AccommodationTier::MidRangeHotels.to_string(), "Mid-Range Hotels");
        assert_eq!(AccommodationTier::NotSpecified.to_string(), "Not Specified");
    }
}
