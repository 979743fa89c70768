//! Itinerary synthesis stage.

use std::sync::Arc;

use crate::domain::assistant::{duration_days, parse_plan, PlanOutcome};
use crate::ports::{ModelError, ModelGateway};

use super::prompts;

/// Inputs for one synthesis call.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub destination: String,
    /// Free-form duration as extracted ("5 days", "a week").
    pub duration: String,
    pub travelers: u32,
    pub interests: Option<String>,
    pub budget: Option<String>,
    /// Client's home city, seeds the flight departure suggestion.
    pub origin: Option<String>,
}

impl SynthesisRequest {
    /// Day count derived from the free-form duration (no digits -> 1).
    pub fn days(&self) -> u32 {
        duration_days(&self.duration)
    }
}

/// Prompts the model for a day-wise plan and repairs its reply.
///
/// One model call per request, no retries; parse failures are recovered by
/// the chain in `domain::assistant::plan` and never error. Only a failed
/// model call propagates.
pub struct ItinerarySynthesizer {
    gateway: Arc<dyn ModelGateway>,
}

impl ItinerarySynthesizer {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<PlanOutcome, ModelError> {
        let days = request.days();
        let prompt = prompts::itinerary(request, days);
        let completion = self.gateway.complete(&prompt).await?;

        let outcome = parse_plan(&completion.text, &request.destination, days);
        if outcome.is_degenerate() {
            tracing::warn!(
                destination = %request.destination,
                "model reply was unparseable; built degenerate single-day plan"
            );
        }
        Ok(outcome)
    }
}
