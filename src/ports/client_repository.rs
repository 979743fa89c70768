//! Client Repository Port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::foundation::{AgencyId, ClientId};
use crate::domain::travel::Client;

/// Tenant-scoped persistence for CRM clients.
///
/// Every operation is filtered by `agency_id`; there is no cross-tenant
/// read or write by construction.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn insert(&self, client: &Client) -> Result<(), RepositoryError>;

    async fn update(&self, client: &Client) -> Result<(), RepositoryError>;

    async fn delete(&self, agency_id: AgencyId, id: ClientId) -> Result<(), RepositoryError>;

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError>;

    /// Case-insensitive substring match on `full_name`, most recent first.
    ///
    /// Returns all matches; the assistant takes the first.
    async fn search_by_name(
        &self,
        agency_id: AgencyId,
        fragment: &str,
    ) -> Result<Vec<Client>, RepositoryError>;

    /// Lists clients, optionally filtered by a name fragment, most recent
    /// first.
    async fn list(
        &self,
        agency_id: AgencyId,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Client>, RepositoryError>;
}
