//! Wire types for the assistant endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::assistant::ChatReply;
use crate::domain::assistant::ConversationTurn;

/// POST /api/assistant/chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Client-managed recent history; only the last few turns are honored.
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

/// Uniform chat response envelope.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            success: true,
            action: reply.action.map(|a| a.as_str()),
            itinerary_id: reply.itinerary_id.map(|id| id.to_string()),
            invoice_id: reply.invoice_id.map(|id| id.to_string()),
            response: reply.response,
            raw: reply.raw,
            timestamp: reply.timestamp,
        }
    }
}
