//! Resolution of a classified intent into an actionable outcome.
//!
//! The orchestrator's branching is a single dispatch over this tagged
//! union rather than nested conditionals: each intent either carries every
//! field its handler needs, or resolves to [`AssistantAction::Clarify`]
//! with the question to ask. Missing fields are normal conversational
//! turns, not errors.

use super::intent::{Intent, IntentRecord};

/// What the assistant should do with a classified message.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantAction {
    /// Generate (or reuse) an itinerary for a named client.
    CreateItinerary {
        client_name: String,
        destination: String,
        duration: String,
    },
    /// Apply an edit instruction to an existing itinerary.
    EditItinerary {
        itinerary_id: Option<String>,
        instruction: String,
    },
    /// Create a draft invoice for a named client.
    CreateInvoice {
        client_name: String,
        amount: f64,
        description: Option<String>,
    },
    /// No actionable intent: fall back to open-ended chat.
    Chat,
    /// Required fields are missing: ask the user instead of acting.
    Clarify(String),
}

impl AssistantAction {
    /// Resolves an intent record into an action.
    ///
    /// Booking and proposal requests are normalized to the itinerary flow:
    /// both ultimately ask for a day-by-day plan.
    pub fn from_record(record: &IntentRecord) -> Self {
        match record.intent {
            Intent::Itinerary | Intent::Booking | Intent::Proposal => {
                let Some(client_name) = non_empty(&record.client_name) else {
                    return AssistantAction::Clarify(
                        "Which client is this trip for? Tell me the client's name and I'll set it up."
                            .to_string(),
                    );
                };
                match (non_empty(&record.destination), non_empty(&record.duration)) {
                    (Some(destination), Some(duration)) => AssistantAction::CreateItinerary {
                        client_name,
                        destination,
                        duration,
                    },
                    _ => AssistantAction::Clarify(
                        "Please provide both destination and duration to create the itinerary."
                            .to_string(),
                    ),
                }
            }
            Intent::EditItinerary => match non_empty(&record.edit_instruction) {
                Some(instruction) => AssistantAction::EditItinerary {
                    itinerary_id: non_empty(&record.itinerary_id),
                    instruction,
                },
                None => AssistantAction::Clarify(
                    "What would you like me to change in the itinerary?".to_string(),
                ),
            },
            Intent::Invoice => {
                match (non_empty(&record.client_name), record.invoice_amount) {
                    (Some(client_name), Some(amount)) => AssistantAction::CreateInvoice {
                        client_name,
                        amount,
                        description: non_empty(&record.invoice_description),
                    },
                    _ => AssistantAction::Clarify(
                        "To raise an invoice I need the client's name and the amount.".to_string(),
                    ),
                }
            }
            Intent::General => AssistantAction::Chat,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(intent: Intent) -> IntentRecord {
        IntentRecord {
            intent,
            ..IntentRecord::fallback()
        }
    }

    #[test]
    fn complete_itinerary_request_resolves() {
        let mut r = record(Intent::Itinerary);
        r.client_name = Some("Jane Smith".to_string());
        r.destination = Some("Paris".to_string());
        r.duration = Some("5 days".to_string());

        assert_eq!(
            AssistantAction::from_record(&r),
            AssistantAction::CreateItinerary {
                client_name: "Jane Smith".to_string(),
                destination: "Paris".to_string(),
                duration: "5 days".to_string(),
            }
        );
    }

    #[test]
    fn booking_and_proposal_normalize_to_itinerary() {
        for intent in [Intent::Booking, Intent::Proposal] {
            let mut r = record(intent);
            r.client_name = Some("Jane".to_string());
            r.destination = Some("Rome".to_string());
            r.duration = Some("3 days".to_string());
            assert!(matches!(
                AssistantAction::from_record(&r),
                AssistantAction::CreateItinerary { .. }
            ));
        }
    }

    #[test]
    fn itinerary_without_client_clarifies() {
        let mut r = record(Intent::Itinerary);
        r.destination = Some("Paris".to_string());
        r.duration = Some("5 days".to_string());
        assert!(matches!(
            AssistantAction::from_record(&r),
            AssistantAction::Clarify(_)
        ));
    }

    #[test]
    fn itinerary_without_destination_or_duration_clarifies() {
        let mut r = record(Intent::Itinerary);
        r.client_name = Some("Jane".to_string());
        r.destination = Some("Paris".to_string());
        let action = AssistantAction::from_record(&r);
        let AssistantAction::Clarify(msg) = action else {
            panic!("expected clarify, got {:?}", action);
        };
        assert!(msg.contains("destination and duration"));
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let mut r = record(Intent::Itinerary);
        r.client_name = Some("   ".to_string());
        r.destination = Some("Paris".to_string());
        r.duration = Some("5 days".to_string());
        assert!(matches!(
            AssistantAction::from_record(&r),
            AssistantAction::Clarify(_)
        ));
    }

    #[test]
    fn invoice_needs_client_and_amount() {
        let mut r = record(Intent::Invoice);
        r.client_name = Some("John Doe".to_string());
        assert!(matches!(
            AssistantAction::from_record(&r),
            AssistantAction::Clarify(_)
        ));

        r.invoice_amount = Some(500.0);
        assert_eq!(
            AssistantAction::from_record(&r),
            AssistantAction::CreateInvoice {
                client_name: "John Doe".to_string(),
                amount: 500.0,
                description: None,
            }
        );
    }

    #[test]
    fn edit_needs_instruction_but_not_id() {
        let mut r = record(Intent::EditItinerary);
        assert!(matches!(
            AssistantAction::from_record(&r),
            AssistantAction::Clarify(_)
        ));

        r.edit_instruction = Some("add a dinner on day 2".to_string());
        assert_eq!(
            AssistantAction::from_record(&r),
            AssistantAction::EditItinerary {
                itinerary_id: None,
                instruction: "add a dinner on day 2".to_string(),
            }
        );
    }

    #[test]
    fn general_falls_through_to_chat() {
        assert_eq!(
            AssistantAction::from_record(&record(Intent::General)),
            AssistantAction::Chat
        );
    }
}
