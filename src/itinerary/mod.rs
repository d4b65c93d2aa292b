//! Itinerary text handling
//!
//! Turns the loosely formatted plain text returned by the generative model into
//! structured day records, and provides the per-line helpers used when those
//! records are displayed:
//! - Parser: day segmentation and line classification
//! - Labels: the category labels recognised at the start of a line
//! - Classifier: keyword based activity kinds and label/content splitting

pub mod classifier;
pub mod labels;
pub mod parser;

pub use classifier::{ActivityKind, FormattedLine, classify_activity, format_label};
pub use labels::CategoryLabel;
pub use parser::{NO_DATA_OVERVIEW, ParsedItinerary, parse_itinerary, parse_itinerary_document};
