//! Prompt construction for itinerary generation
//!
//! The prompt asks for the plain-text layout that the itinerary parser
//! understands: "Day X:" headers, time-of-day lines, labelled accommodation,
//! dining and tip lines, and a general information block at the end.

use crate::models::TripRequest;

/// Format an amount with Indian digit grouping, e.g. `1,50,000`
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{last_three}", groups.join(","))
}

/// Build the generation prompt for a trip request
#[must_use]
pub fn build_itinerary_prompt(request: &TripRequest) -> String {
    let destination = request.destination.trim();
    format!(
        "You are an expert travel planner for India. Create a detailed, engaging, and practical travel itinerary.
Destination: {destination}
Duration: {days} days
Number of People: {people}
Total Budget: ₹{budget} (Indian Rupees)

Please provide the itinerary in a well-structured plain text format (not JSON or Markdown, as it will be parsed later).
Include the following for each day:
- Day X: [Brief overview of the day's theme or main location]
- Morning: [Specific activity or place, estimated time, brief description, and any entry fees if applicable in INR]
- Afternoon: [Specific activity or place, estimated time, brief description, and any entry fees if applicable in INR]
- Evening: [Specific activity or place, estimated time, brief description, and any entry fees if applicable in INR]
- Accommodation: Suggest 1-2 types of accommodation (e.g., \"Mid-range hotel near X\" or \"Boutique guesthouse in Y area\") suitable for the budget.
- Dining: Suggest 1-2 meal options for lunch and dinner (e.g., \"Try local thali at Restaurant Z (Lunch)\").
- Travel Tip: One practical tip for the day.

General Information to include at the end of the itinerary:
- Overall Budget Notes: Briefly mention how the budget might be allocated.
- Transportation: General advice on getting around in {destination}.
- Best Time to Visit {destination}: [Mention ideal months or seasons].
- Cultural Notes: 1-2 important cultural etiquettes for {destination}.

Focus on popular and unique experiences. Ensure the plan is realistic for the given duration and budget.
Be creative and inspiring!",
        days = request.days,
        people = request.people,
        budget = format_inr(request.budget),
    )
}
