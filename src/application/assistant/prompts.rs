//! Prompt builders for the assistant pipeline.
//!
//! Each pipeline stage sends exactly one prompt. The classification and
//! synthesis prompts pin an explicit JSON shape; the parsers in
//! `domain::assistant` handle the drift that remains.

use crate::domain::assistant::{render_history, ConversationTurn};

use super::synthesize::SynthesisRequest;

/// System prompt for the open-ended chat fallback.
pub const SYSTEM_PROMPT: &str = "\
You are Compass, the AI assistant for the Tripdesk B2B travel platform.
You help travel agents manage clients, itineraries, and invoices. Agents can ask you to:
\"Create itinerary for <client> to <destination> for <X days>\"
\"Add a dinner on day 2\" (edit an itinerary)
\"Create invoice for <client> for <amount>\"
Keep replies short and practical.";

/// Prompt asking the model to extract intent fields from a message.
pub fn classification(message: &str) -> String {
    format!(
        r#"Extract fields from the message:
"{message}"

Return ONLY JSON:
{{
  "intent": "itinerary|edit_itinerary|invoice|booking|proposal|general",
  "client_name": "string|null",
  "destination": "string|null",
  "duration": "string|null",
  "dates": "string|null",
  "itinerary_id": "string|null",
  "edit_instruction": "string|null",
  "invoice_amount": "number|null",
  "invoice_description": "string|null"
}}"#
    )
}

/// Prompt asking the model for a full day-wise plan in the fixed JSON shape.
pub fn itinerary(request: &SynthesisRequest, days: u32) -> String {
    let interests = request.interests.as_deref().unwrap_or("general");
    let budget = request.budget.as_deref().unwrap_or("moderate");
    let origin = request.origin.as_deref().unwrap_or("unknown");
    let destination = &request.destination;
    let travelers = request.travelers;

    format!(
        r#"You are an AI travel planner. Generate a complete trip itinerary.

Trip Details:
- Destination: {destination}
- Duration: {days} days
- Travelers: {travelers}
- Budget: {budget}
- Interests: {interests}
- Departure City: {origin}
- Currency: USD

Return ONLY valid JSON:

{{
  "content": "Welcome message (50-80 words)",
  "detailedPlan": {{
    "destination": "{destination}",
    "description": "Description (40-60 words)",
    "duration": "{days} days",
    "travelers": {travelers},
    "budget": "{budget}",
    "totalCost": "Estimated cost range",
    "flights": {{ "departure": "{origin}", "price": "$XXX", "airline": "Name", "duration": "X hours" }},
    "hotel": {{ "name": "Hotel name", "location": "Area", "price": "$XXX/night", "rating": 4.5, "amenities": ["WiFi", "Breakfast"] }},
    "dailyPlan": [
      {{
        "day": 1,
        "title": "Day title",
        "description": "Brief description",
        "activities": ["Activity 1", "Activity 2", "Activity 3", "Activity 4"],
        "activitiesDescription": ["Detail 1 (30-40 words)", "Detail 2", "Detail 3", "Detail 4"],
        "meals": {{ "breakfast": "Suggestion", "lunch": "Suggestion", "dinner": "Suggestion" }},
        "notes": "Notes",
        "weather": "Weather",
        "transport": "Transport"
      }}
    ],
    "weather": {{ "temp": "XX-XX C", "condition": "Condition", "recommendation": "What to pack" }}
  }},
  "suggestions": ["Tip 1", "Tip 2", "Tip 3"]
}}

Create realistic activities and approximate costs per day. Keep JSON strictly valid.
Generate {days} days."#
    )
}

/// Prompt asking the model to apply an edit instruction to an existing plan.
pub fn edit(current_json: &serde_json::Value, instruction: &str) -> String {
    let current = serde_json::to_string_pretty(current_json).unwrap_or_default();
    format!(
        r#"You are an expert travel planner.
I have an existing itinerary JSON:
{current}

User Instruction: "{instruction}"

Please modify the JSON to reflect the user's instruction.
Ensure the structure remains EXACTLY the same.
Return ONLY the modified valid JSON."#
    )
}

/// Prompt for the open-ended chat fallback, with bounded recent history.
pub fn chat(history: &[ConversationTurn], message: &str) -> String {
    format!(
        "{}\n\n{}USER: {}\nCOMPASS:",
        SYSTEM_PROMPT,
        render_history(history),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::TurnRole;

    #[test]
    fn classification_prompt_embeds_message_and_shape() {
        let prompt = classification("Plan a trip to Rome");
        assert!(prompt.contains("\"Plan a trip to Rome\""));
        assert!(prompt.contains("itinerary|edit_itinerary|invoice|booking|proposal|general"));
    }

    #[test]
    fn itinerary_prompt_pins_day_count() {
        let request = SynthesisRequest {
            destination: "Paris".to_string(),
            duration: "5 days".to_string(),
            travelers: 2,
            interests: Some("food, museums".to_string()),
            budget: None,
            origin: None,
        };
        let prompt = itinerary(&request, 5);
        assert!(prompt.contains("- Destination: Paris"));
        assert!(prompt.contains("- Duration: 5 days"));
        assert!(prompt.contains("Generate 5 days."));
        assert!(prompt.contains("food, museums"));
        assert!(prompt.contains("- Budget: moderate"));
    }

    #[test]
    fn chat_prompt_includes_history_window() {
        let history = vec![
            ConversationTurn {
                role: TurnRole::User,
                content: "hi".to_string(),
            },
            ConversationTurn {
                role: TurnRole::Assistant,
                content: "hello".to_string(),
            },
        ];
        let prompt = chat(&history, "what can you do?");
        assert!(prompt.contains("USER: hi"));
        assert!(prompt.contains("ASSISTANT: hello"));
        assert!(prompt.ends_with("USER: what can you do?\nCOMPASS:"));
    }

    #[test]
    fn edit_prompt_embeds_current_plan() {
        let current = serde_json::json!({"detailedPlan": {"destination": "Rome"}});
        let prompt = edit(&current, "add a dinner on day 2");
        assert!(prompt.contains("\"destination\": \"Rome\""));
        assert!(prompt.contains("add a dinner on day 2"));
    }
}
