//! Trip planning service
//!
//! Ties the pieces together: validate the request, build the prompt, ask the
//! generator for itinerary text and parse it into day records.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ItinerAiError;
use crate::generation::ItineraryGenerator;
use crate::itinerary::parse_itinerary_document;
use crate::models::{PlannedTrip, TripRequest};
use crate::prompt::build_itinerary_prompt;

/// Service for planning trips with a generative model
#[derive(Clone)]
pub struct TripPlanner {
    generator: Arc<dyn ItineraryGenerator>,
}

impl TripPlanner {
    /// Create a planner backed by the given generator
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }

    /// Generate and parse an itinerary for the request
    #[instrument(skip(self), fields(destination = %request.destination))]
    pub async fn plan(&self, request: &TripRequest) -> crate::Result<PlannedTrip> {
        request.validate()?;

        let prompt = build_itinerary_prompt(request);
        debug!("Built prompt with {} characters", prompt.len());

        let raw_itinerary = self.generator.generate(&prompt).await?;
        if raw_itinerary.trim().is_empty() {
            return Err(ItinerAiError::api(
                "The AI model did not return any itinerary data",
            ));
        }

        let parsed = parse_itinerary_document(Some(&raw_itinerary));
        info!(
            "Planned {} day(s) for {} ({} requested)",
            parsed.days.len(),
            request.destination,
            request.days
        );

        Ok(PlannedTrip {
            destination: request.destination.trim().to_string(),
            days: request.days,
            people: request.people,
            budget: request.budget,
            accommodation_tier: request.accommodation_tier(),
            raw_itinerary,
            itinerary: parsed.days,
            general_notes: parsed.general_notes,
            generated_at: Utc::now(),
        })
    }
}
