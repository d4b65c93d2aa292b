//! Itinerary text generation
//!
//! The planner only depends on [`ItineraryGenerator`]; [`GeminiClient`] is the
//! production implementation backed by the Gemini REST API.

pub mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiClient;

/// Source of free-text itineraries for a prompt
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Generate itinerary text for the given prompt
    async fn generate(&self, prompt: &str) -> crate::Result<String>;
}
