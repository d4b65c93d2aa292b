//! HTTP handlers for parsing and planning

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ItinerAiError;
use crate::itinerary::{
    ActivityKind, CategoryLabel, ParsedItinerary, classify_activity, format_label,
    parse_itinerary_document,
};
use crate::models::{PlannedTrip, TripRequest};
use crate::planner::TripPlanner;

/// Shared handler state
#[derive(Clone, Default)]
pub struct AppState {
    /// Absent when no Gemini API key is configured
    pub planner: Option<TripPlanner>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatRequest {
    pub line: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedActivity {
    pub kind: ActivityKind,
    pub icon: String,
    pub label: Option<CategoryLabel>,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

impl From<ItinerAiError> for (StatusCode, Json<ErrorBody>) {
    fn from(err: ItinerAiError) -> Self {
        (
            err.status_code(),
            Json(ErrorBody {
                error: err.user_message(),
            }),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/itinerary/parse", post(parse_itinerary_text))
        .route("/activity/format", post(format_activity))
        .route("/trips/plan", post(plan_trip))
        .with_state(state)
}

async fn parse_itinerary_text(Json(payload): Json<ParseRequest>) -> Json<ParsedItinerary> {
    Json(parse_itinerary_document(payload.text.as_deref()))
}

async fn format_activity(Json(payload): Json<FormatRequest>) -> Json<FormattedActivity> {
    let kind = classify_activity(&payload.line);
    let formatted = format_label(&payload.line);
    Json(FormattedActivity {
        kind,
        icon: kind.icon().to_string(),
        label: formatted.label,
        content: formatted.content,
    })
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<PlannedTrip>, ApiError> {
    let planner = state.planner.as_ref().ok_or_else(|| {
        ItinerAiError::config("Trip planning is not configured on this server")
    })?;

    match planner.plan(&request).await {
        Ok(trip) => Ok(Json(trip)),
        Err(err) => {
            warn!("Trip planning failed: {}", err);
            Err(err.into())
        }
    }
}
