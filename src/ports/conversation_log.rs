//! Conversation Log Port - append-only audit of assistant exchanges.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assistant::ConversationEntry;

/// Append-only audit log of chat exchanges.
///
/// Written best-effort by the orchestrator: a failed append is logged and
/// swallowed, never surfaced to the user. The pipeline never reads entries
/// back.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    async fn append(&self, entry: &ConversationEntry) -> Result<(), ConversationLogError>;
}

/// Errors from the audit log store.
#[derive(Debug, Error)]
pub enum ConversationLogError {
    #[error("conversation log write failed: {0}")]
    Storage(String),
}
