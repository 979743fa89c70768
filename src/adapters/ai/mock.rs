//! Mock model gateway for testing.
//!
//! Returns scripted replies in order and records every prompt, so tests can
//! verify both what the pipeline asked and how it handled each reply.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockModelGateway::new()
//!     .with_reply(r#"{"intent": "general"}"#)
//!     .with_reply("Hello there!");
//!
//! let completion = gateway.complete("classify this").await?;
//! assert_eq!(gateway.prompts().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{Completion, ModelError, ModelGateway};

/// A scripted mock reply.
enum MockReply {
    Text(String),
    RateLimited { retry_after_secs: u32 },
    Unavailable(String),
}

/// Mock gateway with scripted replies and prompt capture.
#[derive(Clone, Default)]
pub struct MockModelGateway {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModelGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful text reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues a rate-limit error.
    pub fn with_rate_limit(self, retry_after_secs: u32) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::RateLimited { retry_after_secs });
        self
    }

    /// Queues a provider failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Unavailable(message.into()));
        self
    }

    /// All prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of completions issued.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for MockModelGateway {
    async fn complete(&self, prompt: &str) -> Result<Completion, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(text)) => Ok(Completion {
                text,
                model: "mock".to_string(),
                usage: None,
            }),
            Some(MockReply::RateLimited { retry_after_secs }) => {
                Err(ModelError::RateLimited { retry_after_secs })
            }
            Some(MockReply::Unavailable(message)) => Err(ModelError::Unavailable(message)),
            None => Err(ModelError::Unavailable(
                "mock gateway has no scripted reply".to_string(),
            )),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
