//! Intent classification stage.

use std::sync::Arc;

use crate::domain::assistant::IntentRecord;
use crate::ports::{ModelError, ModelGateway};

use super::prompts;

/// Classifies a free-text message into an [`IntentRecord`].
///
/// One model call per message, no retries. Reply-parse failures degrade to
/// the safe general-chat record; only the model *call* itself can error.
pub struct IntentClassifier {
    gateway: Arc<dyn ModelGateway>,
}

impl IntentClassifier {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn classify(&self, message: &str) -> Result<IntentRecord, ModelError> {
        let prompt = prompts::classification(message);
        let completion = self.gateway.complete(&prompt).await?;
        let record = IntentRecord::parse(&completion.text);
        tracing::debug!(intent = ?record.intent, "classified message");
        Ok(record)
    }
}
