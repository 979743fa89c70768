//! Supplier Repository Port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::foundation::AgencyId;
use crate::domain::travel::Supplier;

/// Tenant-scoped persistence for supplier partners.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn insert(&self, supplier: &Supplier) -> Result<(), RepositoryError>;

    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError>;

    /// Case-insensitive exact-name lookup, the upsert key.
    async fn find_by_name(
        &self,
        agency_id: AgencyId,
        name: &str,
    ) -> Result<Option<Supplier>, RepositoryError>;

    async fn list(
        &self,
        agency_id: AgencyId,
        limit: Option<i64>,
    ) -> Result<Vec<Supplier>, RepositoryError>;
}
