//! Itinerary editing stage.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::domain::assistant::{strip_code_fences, ItineraryPlan};
use crate::domain::foundation::AgencyId;
use crate::domain::travel::Itinerary;
use crate::ports::{ItineraryRepository, ModelError, ModelGateway, RepositoryError};

use super::prompts;

/// Command to apply an edit instruction to an itinerary.
#[derive(Debug, Clone)]
pub struct EditItineraryCommand {
    /// Raw extracted id; when absent or unparseable the agency's most
    /// recently updated itinerary is the target.
    pub itinerary_id: Option<String>,
    pub instruction: String,
    pub agency_id: AgencyId,
}

/// Result of an edit attempt.
#[derive(Debug)]
pub enum EditItineraryOutcome {
    Updated { itinerary: Itinerary },
    /// No itinerary to edit within the agency.
    NotFound,
    /// The model's edited JSON did not parse; nothing was changed.
    Unparseable,
}

/// Errors from the edit stage.
#[derive(Debug, Error)]
pub enum EditItineraryError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Sends an existing plan plus an instruction to the model and stores the
/// modified JSON it returns.
///
/// Unlike synthesis there is no degenerate fallback: replacing a stored
/// plan with garbage is worse than refusing the edit, so an unparseable
/// reply leaves the itinerary untouched.
pub struct EditItineraryHandler {
    gateway: Arc<dyn ModelGateway>,
    itineraries: Arc<dyn ItineraryRepository>,
}

impl EditItineraryHandler {
    pub fn new(gateway: Arc<dyn ModelGateway>, itineraries: Arc<dyn ItineraryRepository>) -> Self {
        Self {
            gateway,
            itineraries,
        }
    }

    pub async fn handle(
        &self,
        cmd: EditItineraryCommand,
    ) -> Result<EditItineraryOutcome, EditItineraryError> {
        let target = self.resolve_target(&cmd).await?;
        let Some(mut itinerary) = target else {
            return Ok(EditItineraryOutcome::NotFound);
        };

        let prompt = prompts::edit(&itinerary.ai_generated_json, &cmd.instruction);
        let completion = self.gateway.complete(&prompt).await?;

        let cleaned = strip_code_fences(&completion.text);
        let Ok(edited) = serde_json::from_str::<serde_json::Value>(&cleaned) else {
            tracing::warn!(itinerary_id = %itinerary.id, "edited plan did not parse; keeping original");
            return Ok(EditItineraryOutcome::Unparseable);
        };
        if !edited.is_object() {
            return Ok(EditItineraryOutcome::Unparseable);
        }

        // Refresh the plain-text summary when the edited JSON still has the
        // expected plan shape; otherwise keep the existing summary.
        let content = serde_json::from_value::<ItineraryPlan>(edited.clone())
            .map(|plan| plan.summary_text())
            .unwrap_or_else(|_| itinerary.ai_generated_content.clone());

        let now = Utc::now();
        self.itineraries
            .update_plan(cmd.agency_id, itinerary.id, &edited, &content, now)
            .await?;

        itinerary.ai_generated_json = edited;
        itinerary.ai_generated_content = content;
        itinerary.updated_at = now;

        Ok(EditItineraryOutcome::Updated { itinerary })
    }

    async fn resolve_target(
        &self,
        cmd: &EditItineraryCommand,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        if let Some(id) = cmd.itinerary_id.as_deref().and_then(|s| s.parse().ok()) {
            return self.itineraries.find_by_id(cmd.agency_id, id).await;
        }
        self.itineraries.latest(cmd.agency_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockModelGateway;
    use crate::adapters::memory::InMemoryItineraryRepository;
    use crate::domain::foundation::UserId;

    fn stored_itinerary(agency_id: AgencyId) -> Itinerary {
        let plan: ItineraryPlan = serde_json::from_value(serde_json::json!({
            "content": "Welcome to Rome!",
            "detailedPlan": {
                "destination": "Rome",
                "dailyPlan": [{"day": 1, "title": "Arrive"}, {"day": 2, "title": "Forum"}]
            }
        }))
        .unwrap();
        Itinerary::from_plan(agency_id, None, UserId::new(), "Rome", 2, &plan, Utc::now())
    }

    fn command(agency_id: AgencyId, itinerary_id: Option<String>) -> EditItineraryCommand {
        EditItineraryCommand {
            itinerary_id,
            instruction: "add a dinner on day 2".to_string(),
            agency_id,
        }
    }

    #[tokio::test]
    async fn edits_explicit_target() {
        let agency = AgencyId::new();
        let repo = Arc::new(InMemoryItineraryRepository::new());
        let stored = stored_itinerary(agency);
        repo.insert(&stored).await.unwrap();

        let edited = r#"{"content": "Welcome to Rome!", "detailedPlan": {"destination": "Rome", "dailyPlan": [{"day": 1}, {"day": 2, "meals": {"dinner": "Trattoria"}}]}}"#;
        let gateway = Arc::new(MockModelGateway::new().with_reply(edited));
        let handler = EditItineraryHandler::new(gateway.clone(), repo.clone());

        let outcome = handler
            .handle(command(agency, Some(stored.id.to_string())))
            .await
            .unwrap();

        let EditItineraryOutcome::Updated { itinerary } = outcome else {
            panic!("expected updated outcome");
        };
        assert_eq!(itinerary.id, stored.id);
        assert!(itinerary.ai_generated_json.to_string().contains("Trattoria"));
        assert!(gateway.prompts()[0].contains("add a dinner on day 2"));

        let reloaded = repo.find_by_id(agency, stored.id).await.unwrap().unwrap();
        assert!(reloaded.ai_generated_json.to_string().contains("Trattoria"));
    }

    #[tokio::test]
    async fn falls_back_to_latest_without_id() {
        let agency = AgencyId::new();
        let repo = Arc::new(InMemoryItineraryRepository::new());
        repo.insert(&stored_itinerary(agency)).await.unwrap();

        let gateway = Arc::new(
            MockModelGateway::new().with_reply(r#"{"detailedPlan": {"destination": "Rome"}}"#),
        );
        let handler = EditItineraryHandler::new(gateway, repo);

        let outcome = handler.handle(command(agency, None)).await.unwrap();
        assert!(matches!(outcome, EditItineraryOutcome::Updated { .. }));
    }

    #[tokio::test]
    async fn missing_target_is_not_found() {
        let repo = Arc::new(InMemoryItineraryRepository::new());
        let gateway = Arc::new(MockModelGateway::new());
        let handler = EditItineraryHandler::new(gateway.clone(), repo);

        let outcome = handler.handle(command(AgencyId::new(), None)).await.unwrap();
        assert!(matches!(outcome, EditItineraryOutcome::NotFound));
        // No model call without a target.
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn unparseable_edit_keeps_original() {
        let agency = AgencyId::new();
        let repo = Arc::new(InMemoryItineraryRepository::new());
        let stored = stored_itinerary(agency);
        repo.insert(&stored).await.unwrap();

        let gateway = Arc::new(MockModelGateway::new().with_reply("I added the dinner for you!"));
        let handler = EditItineraryHandler::new(gateway, repo.clone());

        let outcome = handler.handle(command(agency, None)).await.unwrap();
        assert!(matches!(outcome, EditItineraryOutcome::Unparseable));

        let reloaded = repo.find_by_id(agency, stored.id).await.unwrap().unwrap();
        assert_eq!(reloaded.ai_generated_json, stored.ai_generated_json);
    }

    #[tokio::test]
    async fn cross_tenant_id_is_not_found() {
        let repo = Arc::new(InMemoryItineraryRepository::new());
        let stored = stored_itinerary(AgencyId::new());
        repo.insert(&stored).await.unwrap();

        let gateway = Arc::new(MockModelGateway::new());
        let handler = EditItineraryHandler::new(gateway, repo);

        let outcome = handler
            .handle(command(AgencyId::new(), Some(stored.id.to_string())))
            .await
            .unwrap();
        assert!(matches!(outcome, EditItineraryOutcome::NotFound));
    }
}
