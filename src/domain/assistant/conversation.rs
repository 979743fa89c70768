//! Conversation context and the audit log entry.
//!
//! Chat history is client-managed: each request carries its own recent
//! window, and only the most recent [`HISTORY_WINDOW`] turns are honored.
//! There is no server-side session state. Exchanges are independently
//! appended to an audit log, best-effort, and never read back by the
//! pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{AgencyId, UserId};

/// Maximum number of prior turns included in the chat prompt.
pub const HISTORY_WINDOW: usize = 6;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Uppercase label used when rendering history into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            TurnRole::User => "USER",
            TurnRole::Assistant => "ASSISTANT",
        }
    }
}

/// One ephemeral turn of client-supplied history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

/// Renders the most recent turns as `ROLE: content` lines for the chat
/// prompt, oldest first.
pub fn render_history(turns: &[ConversationTurn]) -> String {
    let start = turns.len().saturating_sub(HISTORY_WINDOW);
    turns[start..]
        .iter()
        .map(|t| format!("{}: {}\n", t.role.label(), t.content))
        .collect()
}

/// One persisted exchange in the audit log.
#[derive(Debug, Clone)]
pub struct ConversationEntry {
    pub id: Uuid,
    pub agency_id: AgencyId,
    pub user_id: UserId,
    pub user_message: String,
    pub assistant_response: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationEntry {
    /// Creates a new audit entry for one exchange.
    pub fn new(
        agency_id: AgencyId,
        user_id: UserId,
        user_message: impl Into<String>,
        assistant_response: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            agency_id,
            user_id,
            user_message: user_message.into(),
            assistant_response: assistant_response.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: TurnRole, content: &str) -> ConversationTurn {
        ConversationTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn renders_roles_uppercase() {
        let turns = vec![
            turn(TurnRole::User, "hi"),
            turn(TurnRole::Assistant, "hello"),
        ];
        assert_eq!(render_history(&turns), "USER: hi\nASSISTANT: hello\n");
    }

    #[test]
    fn honors_only_recent_window() {
        let turns: Vec<ConversationTurn> = (0..10)
            .map(|i| turn(TurnRole::User, &format!("m{}", i)))
            .collect();
        let rendered = render_history(&turns);
        assert!(!rendered.contains("m3"));
        assert!(rendered.contains("m4"));
        assert!(rendered.contains("m9"));
        assert_eq!(rendered.lines().count(), HISTORY_WINDOW);
    }

    #[test]
    fn empty_history_renders_empty() {
        assert_eq!(render_history(&[]), "");
    }

    #[test]
    fn role_deserializes_lowercase() {
        let role: TurnRole = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, TurnRole::Assistant);
    }
}
