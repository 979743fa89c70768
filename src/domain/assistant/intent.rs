//! Intent classification types.
//!
//! The classifier asks the model to reduce a free-text message to a typed
//! [`IntentRecord`]. Free text cannot be reliably parsed with rules across
//! many phrasings, so extraction is delegated to the model; the cost is that
//! the model's reply may itself be malformed. [`IntentRecord::parse`]
//! therefore never fails: anything unparseable degrades to a
//! [`Intent::General`] record with empty fields, and ambiguity resolution
//! (asking the user for missing fields) happens downstream.

use serde::{Deserialize, Deserializer, Serialize};

use super::repair::strip_code_fences;

/// The closed set of intents the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Itinerary,
    EditItinerary,
    Invoice,
    Booking,
    Proposal,
    #[default]
    General,
}

impl Intent {
    /// Maps a wire string to an intent; unknown strings become `General`.
    fn from_wire(s: &str) -> Self {
        match s {
            "itinerary" => Intent::Itinerary,
            "edit_itinerary" => Intent::EditItinerary,
            "invoice" => Intent::Invoice,
            "booking" => Intent::Booking,
            "proposal" => Intent::Proposal,
            _ => Intent::General,
        }
    }
}

// Unknown variants must not fail the whole record, so deserialization maps
// them to General instead of erroring like a derived impl would.
impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Intent::from_wire(&s))
    }
}

/// Structured fields extracted from a single user message.
///
/// Transient: produced fresh per message, never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRecord {
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub itinerary_id: Option<String>,
    #[serde(default)]
    pub edit_instruction: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub invoice_amount: Option<f64>,
    #[serde(default)]
    pub invoice_description: Option<String>,
}

impl IntentRecord {
    /// Parses a raw model reply into an intent record.
    ///
    /// Strips markdown fences, then attempts a JSON parse. On any failure
    /// the safe default is returned - classification never errors.
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_code_fences(raw);
        serde_json::from_str(&cleaned).unwrap_or_else(|_| Self::fallback())
    }

    /// The safe default: a general-chat record with no extracted fields.
    pub fn fallback() -> Self {
        Self {
            intent: Intent::General,
            client_name: None,
            destination: None,
            duration: None,
            dates: None,
            itinerary_id: None,
            edit_instruction: None,
            invoice_amount: None,
            invoice_description: None,
        }
    }
}

/// Accepts a JSON string or number for fields the model is asked to return
/// as strings but sometimes returns bare (e.g. `"duration": 5`).
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts a JSON number or a numeric string for amount fields.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().trim_start_matches('$').parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_full_record() {
        let raw = r#"{
            "intent": "itinerary",
            "client_name": "Jane Smith",
            "destination": "Paris",
            "duration": "5 days",
            "dates": null,
            "itinerary_id": null,
            "edit_instruction": null,
            "invoice_amount": null,
            "invoice_description": null
        }"#;
        let record = IntentRecord::parse(raw);
        assert_eq!(record.intent, Intent::Itinerary);
        assert_eq!(record.client_name.as_deref(), Some("Jane Smith"));
        assert_eq!(record.destination.as_deref(), Some("Paris"));
        assert_eq!(record.duration.as_deref(), Some("5 days"));
    }

    #[test]
    fn parses_fenced_record() {
        let raw = "```json\n{\"intent\": \"invoice\", \"client_name\": \"John Doe\", \"invoice_amount\": 500}\n```";
        let record = IntentRecord::parse(raw);
        assert_eq!(record.intent, Intent::Invoice);
        assert_eq!(record.invoice_amount, Some(500.0));
    }

    #[test]
    fn garbage_degrades_to_general() {
        let record = IntentRecord::parse("I'm sorry, I can't help with that.");
        assert_eq!(record.intent, Intent::General);
        assert!(record.client_name.is_none());
        assert!(record.destination.is_none());
        assert!(record.duration.is_none());
        assert!(record.dates.is_none());
    }

    #[test]
    fn unknown_intent_string_becomes_general() {
        let record = IntentRecord::parse(r#"{"intent": "weather_report"}"#);
        assert_eq!(record.intent, Intent::General);
    }

    #[test]
    fn missing_intent_field_becomes_general() {
        let record = IntentRecord::parse(r#"{"client_name": "Jane"}"#);
        assert_eq!(record.intent, Intent::General);
        assert_eq!(record.client_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn numeric_duration_is_stringified() {
        let record = IntentRecord::parse(r#"{"intent": "itinerary", "duration": 5}"#);
        assert_eq!(record.duration.as_deref(), Some("5"));
    }

    #[test]
    fn string_amount_is_parsed() {
        let record = IntentRecord::parse(r#"{"intent": "invoice", "invoice_amount": "$500"}"#);
        assert_eq!(record.invoice_amount, Some(500.0));
    }

    #[test]
    fn edit_fields_survive() {
        let raw = r#"{"intent": "edit_itinerary", "itinerary_id": "abc", "edit_instruction": "add a dinner on day 2"}"#;
        let record = IntentRecord::parse(raw);
        assert_eq!(record.intent, Intent::EditItinerary);
        assert_eq!(record.itinerary_id.as_deref(), Some("abc"));
        assert_eq!(
            record.edit_instruction.as_deref(),
            Some("add a dinner on day 2")
        );
    }

    proptest! {
        // Classification never panics and always yields a well-typed record.
        #[test]
        fn parse_never_panics(raw in ".*") {
            let _ = IntentRecord::parse(&raw);
        }
    }
}
