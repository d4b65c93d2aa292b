//! Day-by-day itinerary parser
//!
//! The input is free text written by a language model, so nothing about its
//! shape is guaranteed. Parsing never fails: text without day markers becomes a
//! single day, and blank input becomes a placeholder day.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::labels::CategoryLabel;
use crate::models::DayRecord;

/// Overview used when there is nothing to parse
pub const NO_DATA_OVERVIEW: &str = "No itinerary data provided.";

/// "Day 3:", "day 3 -", "Day 3 –", "Day 3—"
static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Day\s*(\d+)\s*[:\-–—]").unwrap());

/// Headings that open the general information block after the last day
const GENERAL_NOTES_HEADINGS: [&str; 4] = [
    "general information",
    "general notes",
    "general tips",
    "overall budget notes",
];

/// Full parse result: the days plus the trailing general information
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParsedItinerary {
    pub days: Vec<DayRecord>,
    pub general_notes: Vec<String>,
}

impl ParsedItinerary {
    fn no_data() -> Self {
        let mut day = DayRecord::new(1);
        day.overview = Some(NO_DATA_OVERVIEW.to_string());
        Self {
            days: vec![day],
            general_notes: Vec::new(),
        }
    }
}

struct DayMarker {
    start: usize,
    end: usize,
    number: Option<u32>,
}

/// Parse itinerary text into day records, in order of appearance.
///
/// Always returns at least one record.
#[must_use]
pub fn parse_itinerary(text: &str) -> Vec<DayRecord> {
    parse_itinerary_document(Some(text)).days
}

/// Parse itinerary text, keeping the general notes that follow the last day.
#[must_use]
pub fn parse_itinerary_document(text: Option<&str>) -> ParsedItinerary {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        debug!("Empty itinerary text, returning placeholder day");
        return ParsedItinerary::no_data();
    };

    let markers: Vec<DayMarker> = DAY_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(DayMarker {
                start: whole.start(),
                end: whole.end(),
                number: caps.get(1).and_then(|n| n.as_str().parse().ok()),
            })
        })
        .collect();

    if markers.is_empty() {
        debug!("No day markers found, treating text as a single day");
        return single_day(text);
    }

    let mut next_sequential = 1;
    let mut days = Vec::with_capacity(markers.len());
    let mut general_notes = Vec::new();

    for (index, marker) in markers.iter().enumerate() {
        let section_end = markers.get(index + 1).map_or(text.len(), |next| next.start);
        let mut lines = content_lines(&text[marker.end..section_end]);

        if index + 1 == markers.len() {
            if let Some(position) = lines.iter().position(|line| is_general_notes_heading(line)) {
                general_notes = lines.split_off(position);
            }
        }

        let day_number = marker.number.unwrap_or_else(|| {
            debug!("Unreadable day number, assigning {}", next_sequential);
            let number = next_sequential;
            next_sequential += 1;
            number
        });

        days.push(classify_day(day_number, lines));
    }

    ParsedItinerary {
        days,
        general_notes,
    }
}

/// Marker-less text: one day, first line as overview when more lines follow
fn single_day(text: &str) -> ParsedItinerary {
    let mut lines = content_lines(text);
    if lines.is_empty() {
        return ParsedItinerary::no_data();
    }

    let mut day = DayRecord::new(1);
    if lines.len() > 1 && !starts_with_single_day_label(&lines[0]) {
        day.overview = Some(lines.remove(0));
    }
    day.activities = lines;

    ParsedItinerary {
        days: vec![day],
        general_notes: Vec::new(),
    }
}

fn classify_day(day_number: u32, lines: Vec<String>) -> DayRecord {
    let mut day = DayRecord::new(day_number);
    let mut lines = lines.into_iter().peekable();

    if let Some(first) = lines.next_if(|line| CategoryLabel::detect(line).is_none()) {
        day.overview = Some(strip_overview(&first).to_string());
    }

    for line in lines {
        match CategoryLabel::split_prefix(&line) {
            Some((CategoryLabel::Accommodation, rest)) => {
                day.accommodation.push(rest.trim().to_string());
            }
            Some((CategoryLabel::Dining, rest)) => day.dining.push(rest.trim().to_string()),
            Some((CategoryLabel::TravelTip, rest)) => {
                day.travel_tips.push(rest.trim().to_string());
            }
            // time-of-day lines keep their label
            Some(_) | None => day.activities.push(line),
        }
    }

    day
}

/// Trimmed, non-blank lines
fn content_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_overview(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .trim_end()
}

/// Label check for marker-less text; "Night:" is not considered here
fn starts_with_single_day_label(line: &str) -> bool {
    CategoryLabel::detect(line).is_some_and(|label| label != CategoryLabel::Night)
}

fn is_general_notes_heading(line: &str) -> bool {
    let line = line.to_lowercase();
    GENERAL_NOTES_HEADINGS
        .iter()
        .any(|heading| line.starts_with(heading))
}
