//! Invoice Repository Port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::foundation::{AgencyId, ClientId, InvoiceId};
use crate::domain::travel::Invoice;

/// Tenant-scoped persistence for invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn insert(&self, invoice: &Invoice) -> Result<(), RepositoryError>;

    async fn update(&self, invoice: &Invoice) -> Result<(), RepositoryError>;

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: InvoiceId,
    ) -> Result<Option<Invoice>, RepositoryError>;

    /// Lists invoices most recent first, optionally for a single client.
    async fn list(
        &self,
        agency_id: AgencyId,
        client_id: Option<ClientId>,
    ) -> Result<Vec<Invoice>, RepositoryError>;

    async fn delete(&self, agency_id: AgencyId, id: InvoiceId) -> Result<(), RepositoryError>;
}
