//! Conversation orchestration.
//!
//! Each request is a fresh run: classify the message, dispatch on the
//! resolved [`AssistantAction`], persist whatever was created, and shape a
//! uniform reply. There is no cross-request state; the only context is the
//! client-supplied history window.
//!
//! Failure policy (see the error taxonomy in `ports`):
//! - missing fields and unknown clients are conversational replies, not
//!   errors;
//! - a rate-limited model call becomes a friendly in-band message;
//! - anything else propagates as [`ChatError`] for the HTTP layer to turn
//!   into a 500.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::assistant::{
    duration_days, AssistantAction, ConversationEntry, ConversationTurn,
};
use crate::domain::foundation::{AgencyId, InvoiceId, ItineraryId, UserId};
use crate::domain::travel::Itinerary;
use crate::ports::{
    ClientRepository, ConversationLog, InvoiceRepository, ItineraryRepository, ModelError,
    ModelGateway, RepositoryError,
};

use super::edit::{EditItineraryCommand, EditItineraryHandler, EditItineraryOutcome};
use super::invoice::{CreateInvoiceCommand, CreateInvoiceHandler, CreateInvoiceOutcome};
use super::prompts;
use super::reuse::ItineraryReuse;
use super::synthesize::{ItinerarySynthesizer, SynthesisRequest};
use super::IntentClassifier;

/// Reply sent when the model provider rate-limits us. Returned in-band with
/// a 200, never as an error status.
const RATE_LIMITED_REPLY: &str =
    "I'm handling a lot of requests right now and the travel model is throttling me. \
     Please try again in a moment.";

/// One chat request.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub message: String,
    pub history: Vec<ConversationTurn>,
    pub agency_id: AgencyId,
    pub user_id: UserId,
}

/// Action the assistant completed, reported in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    ItineraryCreated,
    ItineraryUpdated,
    InvoiceCreated,
}

impl ChatAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatAction::ItineraryCreated => "itinerary_created",
            ChatAction::ItineraryUpdated => "itinerary_updated",
            ChatAction::InvoiceCreated => "invoice_created",
        }
    }
}

/// Uniform reply envelope for every conversational outcome.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub action: Option<ChatAction>,
    pub itinerary_id: Option<ItineraryId>,
    pub invoice_id: Option<InvoiceId>,
    pub response: String,
    /// The created/updated plan, when one exists.
    pub raw: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ChatReply {
    /// A plain conversational reply with no side effects.
    fn message(text: impl Into<String>) -> Self {
        Self {
            action: None,
            itinerary_id: None,
            invoice_id: None,
            response: text.into(),
            raw: None,
            timestamp: Utc::now(),
        }
    }
}

/// Hard pipeline failures; everything conversational is a `ChatReply`.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<super::edit::EditItineraryError> for ChatError {
    fn from(err: super::edit::EditItineraryError) -> Self {
        match err {
            super::edit::EditItineraryError::Model(e) => ChatError::Model(e),
            super::edit::EditItineraryError::Repository(e) => ChatError::Repository(e),
        }
    }
}

/// The conversation orchestrator.
pub struct ChatHandler {
    gateway: Arc<dyn ModelGateway>,
    clients: Arc<dyn ClientRepository>,
    itineraries: Arc<dyn ItineraryRepository>,
    log: Arc<dyn ConversationLog>,
    classifier: IntentClassifier,
    synthesizer: ItinerarySynthesizer,
    reuse: ItineraryReuse,
    invoicer: CreateInvoiceHandler,
    editor: EditItineraryHandler,
}

impl ChatHandler {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        clients: Arc<dyn ClientRepository>,
        itineraries: Arc<dyn ItineraryRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        log: Arc<dyn ConversationLog>,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(gateway.clone()),
            synthesizer: ItinerarySynthesizer::new(gateway.clone()),
            reuse: ItineraryReuse::new(itineraries.clone()),
            invoicer: CreateInvoiceHandler::new(clients.clone(), invoices),
            editor: EditItineraryHandler::new(gateway.clone(), itineraries.clone()),
            gateway,
            clients,
            itineraries,
            log,
        }
    }

    /// Runs one full conversational turn.
    pub async fn handle(&self, cmd: ChatCommand) -> Result<ChatReply, ChatError> {
        let reply = match self.dispatch(&cmd).await {
            Ok(reply) => reply,
            Err(ChatError::Model(err)) if err.is_rate_limited() => {
                tracing::warn!("model rate limited; degrading to in-band reply");
                ChatReply::message(RATE_LIMITED_REPLY)
            }
            Err(err) => return Err(err),
        };

        self.log_exchange(&cmd, &reply).await;
        Ok(reply)
    }

    async fn dispatch(&self, cmd: &ChatCommand) -> Result<ChatReply, ChatError> {
        let record = self.classifier.classify(&cmd.message).await?;

        match AssistantAction::from_record(&record) {
            AssistantAction::CreateItinerary {
                client_name,
                destination,
                duration,
            } => {
                self.create_itinerary(cmd, &client_name, &destination, &duration)
                    .await
            }
            AssistantAction::EditItinerary {
                itinerary_id,
                instruction,
            } => self.edit_itinerary(cmd, itinerary_id, instruction).await,
            AssistantAction::CreateInvoice {
                client_name,
                amount,
                description,
            } => self.create_invoice(cmd, client_name, amount, description).await,
            AssistantAction::Clarify(question) => Ok(ChatReply::message(question)),
            AssistantAction::Chat => self.open_chat(cmd).await,
        }
    }

    async fn create_itinerary(
        &self,
        cmd: &ChatCommand,
        client_name: &str,
        destination: &str,
        duration: &str,
    ) -> Result<ChatReply, ChatError> {
        let matches = self
            .clients
            .search_by_name(cmd.agency_id, client_name)
            .await?;
        let Some(client) = matches.into_iter().next() else {
            return Ok(ChatReply::message(format!(
                "I couldn't find a client similar to \"{}\".",
                client_name
            )));
        };

        // Reuse an existing plan for this destination instead of paying for
        // another generation. Served as stored, not re-personalized.
        if let Some(existing) = self.reuse.find_reusable(cmd.agency_id, destination).await? {
            return Ok(ChatReply {
                action: Some(ChatAction::ItineraryCreated),
                itinerary_id: Some(existing.id),
                invoice_id: None,
                response: format!(
                    "You already have a recent {} itinerary - I've pulled it up instead of generating a new one.",
                    existing.destination
                ),
                raw: Some(existing.ai_generated_json),
                timestamp: Utc::now(),
            });
        }

        let request = SynthesisRequest {
            destination: destination.to_string(),
            duration: duration.to_string(),
            travelers: 1,
            interests: client.interests.clone(),
            budget: client.budget_range.clone(),
            origin: client.address.clone(),
        };
        let plan = self.synthesizer.synthesize(&request).await?.into_plan();

        // Prefer the day count the model committed to in the plan itself.
        let days = plan
            .detailed_plan
            .duration
            .as_deref()
            .map(duration_days)
            .unwrap_or_else(|| request.days());

        let itinerary = Itinerary::from_plan(
            cmd.agency_id,
            Some(client.id),
            cmd.user_id,
            destination,
            days as i32,
            &plan,
            Utc::now(),
        );
        self.itineraries.insert(&itinerary).await?;

        tracing::info!(
            itinerary_id = %itinerary.id,
            client_id = %client.id,
            destination = %destination,
            "itinerary created"
        );

        Ok(ChatReply {
            action: Some(ChatAction::ItineraryCreated),
            itinerary_id: Some(itinerary.id),
            invoice_id: None,
            response: format!(
                "Itinerary created for {}. Destination: {}.",
                client.full_name, destination
            ),
            raw: Some(itinerary.ai_generated_json),
            timestamp: Utc::now(),
        })
    }

    async fn edit_itinerary(
        &self,
        cmd: &ChatCommand,
        itinerary_id: Option<String>,
        instruction: String,
    ) -> Result<ChatReply, ChatError> {
        let outcome = self
            .editor
            .handle(EditItineraryCommand {
                itinerary_id,
                instruction,
                agency_id: cmd.agency_id,
            })
            .await?;

        Ok(match outcome {
            EditItineraryOutcome::Updated { itinerary } => ChatReply {
                action: Some(ChatAction::ItineraryUpdated),
                itinerary_id: Some(itinerary.id),
                invoice_id: None,
                response: format!("I've updated the {} itinerary.", itinerary.destination),
                raw: Some(itinerary.ai_generated_json),
                timestamp: Utc::now(),
            },
            EditItineraryOutcome::NotFound => {
                ChatReply::message("I couldn't find an itinerary to edit for your agency.")
            }
            EditItineraryOutcome::Unparseable => ChatReply::message(
                "I couldn't apply that change cleanly, so I've left the itinerary as it was. \
                 Could you rephrase the edit?",
            ),
        })
    }

    async fn create_invoice(
        &self,
        cmd: &ChatCommand,
        client_name: String,
        amount: f64,
        description: Option<String>,
    ) -> Result<ChatReply, ChatError> {
        let outcome = self
            .invoicer
            .handle(CreateInvoiceCommand {
                client_name,
                amount,
                description,
                due_date: None,
                agency_id: cmd.agency_id,
                created_by: cmd.user_id,
            })
            .await?;

        Ok(match outcome {
            CreateInvoiceOutcome::Created { invoice, client } => ChatReply {
                action: Some(ChatAction::InvoiceCreated),
                itinerary_id: None,
                invoice_id: Some(invoice.id),
                response: format!(
                    "Invoice {} created for {} ({} USD, draft).",
                    invoice.invoice_number, client.full_name, invoice.total
                ),
                raw: None,
                timestamp: Utc::now(),
            },
            CreateInvoiceOutcome::ClientNotFound { client_name } => ChatReply::message(format!(
                "I couldn't find a client similar to \"{}\".",
                client_name
            )),
        })
    }

    async fn open_chat(&self, cmd: &ChatCommand) -> Result<ChatReply, ChatError> {
        let prompt = prompts::chat(&cmd.history, &cmd.message);
        let completion = self.gateway.complete(&prompt).await?;
        Ok(ChatReply::message(completion.text.trim()))
    }

    /// Appends the exchange to the audit log. Best-effort: failures are
    /// logged and swallowed.
    async fn log_exchange(&self, cmd: &ChatCommand, reply: &ChatReply) {
        let entry = ConversationEntry::new(
            cmd.agency_id,
            cmd.user_id,
            cmd.message.clone(),
            reply.response.clone(),
            Utc::now(),
        );
        if let Err(err) = self.log.append(&entry).await {
            tracing::warn!(error = %err, "conversation audit append failed");
        }
    }
}
