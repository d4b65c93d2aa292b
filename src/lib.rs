//! `ItinerAI` - AI-assisted travel itinerary planning
//!
//! This library turns loosely formatted, model-generated itinerary text into
//! structured day-by-day records, and provides the prompt, generation and
//! planning pieces around it.

pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod itinerary;
pub mod logging;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod web;

// Re-export core types for public API
pub use config::ItinerAiConfig;
pub use error::ItinerAiError;
pub use generation::{GeminiClient, ItineraryGenerator};
pub use itinerary::{
    ActivityKind, CategoryLabel, FormattedLine, ParsedItinerary, classify_activity, format_label,
    parse_itinerary, parse_itinerary_document,
};
pub use models::{AccommodationTier, DayRecord, PlannedTrip, TripRequest};
pub use planner::TripPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ItinerAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
