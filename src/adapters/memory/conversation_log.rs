//! In-memory ConversationLog for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assistant::ConversationEntry;
use crate::ports::{ConversationLog, ConversationLogError};

/// In-memory audit log; can be switched to fail for best-effort testing.
#[derive(Clone, Default)]
pub struct InMemoryConversationLog {
    entries: Arc<RwLock<Vec<ConversationEntry>>>,
    failing: bool,
}

impl InMemoryConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every append fail, to verify the pipeline treats the log as
    /// best-effort.
    pub fn failing() -> Self {
        Self {
            entries: Arc::default(),
            failing: true,
        }
    }

    /// Entries appended so far.
    pub async fn entries(&self) -> Vec<ConversationEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn append(&self, entry: &ConversationEntry) -> Result<(), ConversationLogError> {
        if self.failing {
            return Err(ConversationLogError::Storage(
                "simulated log failure".to_string(),
            ));
        }
        self.entries.write().await.push(entry.clone());
        Ok(())
    }
}
