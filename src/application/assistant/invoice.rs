//! Invoice creation stage.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::foundation::{AgencyId, UserId};
use crate::domain::travel::{Client, Invoice};
use crate::ports::{ClientRepository, InvoiceRepository, RepositoryError};

/// Command to create a draft invoice from extracted fields.
#[derive(Debug, Clone)]
pub struct CreateInvoiceCommand {
    /// Fuzzy client name as extracted from the message.
    pub client_name: String,
    pub amount: f64,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub agency_id: AgencyId,
    pub created_by: UserId,
}

/// Result of invoice creation.
///
/// An unknown client is a conversational outcome, not an error: the
/// orchestrator turns it into a clarifying reply.
#[derive(Debug)]
pub enum CreateInvoiceOutcome {
    Created { invoice: Invoice, client: Client },
    ClientNotFound { client_name: String },
}

/// Creates draft invoices from assistant requests.
///
/// Client resolution is first-match-wins over a fuzzy name search. There
/// is no idempotency key: a retried request creates a second draft, which
/// agents review before sending anyway.
pub struct CreateInvoiceHandler {
    clients: Arc<dyn ClientRepository>,
    invoices: Arc<dyn InvoiceRepository>,
}

impl CreateInvoiceHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, invoices: Arc<dyn InvoiceRepository>) -> Self {
        Self { clients, invoices }
    }

    pub async fn handle(
        &self,
        cmd: CreateInvoiceCommand,
    ) -> Result<CreateInvoiceOutcome, RepositoryError> {
        let matches = self
            .clients
            .search_by_name(cmd.agency_id, &cmd.client_name)
            .await?;

        let Some(client) = matches.into_iter().next() else {
            return Ok(CreateInvoiceOutcome::ClientNotFound {
                client_name: cmd.client_name,
            });
        };

        let invoice = Invoice::draft(
            cmd.agency_id,
            client.id,
            cmd.amount,
            cmd.description,
            cmd.due_date,
            cmd.created_by,
            Utc::now(),
        );
        self.invoices.insert(&invoice).await?;

        tracing::info!(
            invoice_id = %invoice.id,
            invoice_number = %invoice.invoice_number,
            client_id = %client.id,
            "invoice created"
        );

        Ok(CreateInvoiceOutcome::Created { invoice, client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientRepository, InMemoryInvoiceRepository};
    use crate::domain::travel::InvoiceStatus;

    fn handler() -> (
        CreateInvoiceHandler,
        Arc<InMemoryClientRepository>,
        Arc<InMemoryInvoiceRepository>,
    ) {
        let clients = Arc::new(InMemoryClientRepository::new());
        let invoices = Arc::new(InMemoryInvoiceRepository::new());
        (
            CreateInvoiceHandler::new(clients.clone(), invoices.clone()),
            clients,
            invoices,
        )
    }

    fn command(agency_id: AgencyId, client_name: &str, amount: f64) -> CreateInvoiceCommand {
        CreateInvoiceCommand {
            client_name: client_name.to_string(),
            amount,
            description: None,
            due_date: None,
            agency_id,
            created_by: UserId::new(),
        }
    }

    #[tokio::test]
    async fn creates_draft_for_fuzzy_match() {
        let (handler, clients, invoices) = handler();
        let agency = AgencyId::new();
        clients
            .insert(&Client::new(agency, "John Doe", Utc::now()))
            .await
            .unwrap();

        let outcome = handler.handle(command(agency, "john doe", 500.0)).await.unwrap();

        let CreateInvoiceOutcome::Created { invoice, client } = outcome else {
            panic!("expected created outcome");
        };
        assert_eq!(client.full_name, "John Doe");
        assert_eq!(invoice.total, 500.0);
        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert!(invoice.invoice_number.starts_with("INV-"));
        assert!(invoice.due_date.is_some());
        assert_eq!(invoices.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_client_is_soft_failure() {
        let (handler, _clients, invoices) = handler();
        let outcome = handler
            .handle(command(AgencyId::new(), "Nobody", 100.0))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            CreateInvoiceOutcome::ClientNotFound { client_name } if client_name == "Nobody"
        ));
        assert!(invoices.is_empty().await);
    }

    #[tokio::test]
    async fn does_not_match_clients_of_other_tenants() {
        let (handler, clients, invoices) = handler();
        clients
            .insert(&Client::new(AgencyId::new(), "John Doe", Utc::now()))
            .await
            .unwrap();

        let outcome = handler
            .handle(command(AgencyId::new(), "John Doe", 100.0))
            .await
            .unwrap();

        assert!(matches!(outcome, CreateInvoiceOutcome::ClientNotFound { .. }));
        assert!(invoices.is_empty().await);
    }

    #[tokio::test]
    async fn first_match_wins_on_ambiguous_name() {
        let (handler, clients, _invoices) = handler();
        let agency = AgencyId::new();
        let older = Client::new(agency, "John Doe", Utc::now() - chrono::Duration::days(1));
        let newer = Client::new(agency, "John Doe Jr", Utc::now());
        clients.insert(&older).await.unwrap();
        clients.insert(&newer).await.unwrap();

        let outcome = handler.handle(command(agency, "john", 50.0)).await.unwrap();
        let CreateInvoiceOutcome::Created { client, .. } = outcome else {
            panic!("expected created outcome");
        };
        // Most recent first; the handler takes the first match.
        assert_eq!(client.id, newer.id);
    }
}
