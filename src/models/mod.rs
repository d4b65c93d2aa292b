//! Data models for the ItinerAI application
//!
//! This module contains the core domain models organized by concern:
//! - Day: One structured day of a parsed itinerary
//! - Trip: Trip preferences collected from the user and the planned result

pub mod day;
pub mod trip;

// Re-export all public types for convenient access
pub use day::DayRecord;
pub use trip::{AccommodationTier, PlannedTrip, TripRequest};
