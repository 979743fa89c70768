//! PostgreSQL implementation of the conversation audit log.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::assistant::ConversationEntry;
use crate::ports::{ConversationLog, ConversationLogError};

/// Append-only writer for the `ai_conversations` table.
#[derive(Clone)]
pub struct PostgresConversationLog {
    pool: PgPool,
}

impl PostgresConversationLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationLog for PostgresConversationLog {
    async fn append(&self, entry: &ConversationEntry) -> Result<(), ConversationLogError> {
        sqlx::query(
            r#"
            INSERT INTO ai_conversations (
                id, agency_id, user_id, user_message, ai_response, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id)
        .bind(entry.agency_id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(&entry.user_message)
        .bind(&entry.assistant_response)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ConversationLogError::Storage(e.to_string()))?;

        Ok(())
    }
}
