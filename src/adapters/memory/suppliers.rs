//! In-memory SupplierRepository for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::AgencyId;
use crate::domain::travel::Supplier;
use crate::ports::{RepositoryError, SupplierRepository};

/// In-memory supplier store.
#[derive(Clone, Default)]
pub struct InMemorySupplierRepository {
    rows: Arc<RwLock<Vec<Supplier>>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn insert(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        self.rows.write().await.push(supplier.clone());
        Ok(())
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|s| s.id == supplier.id && s.agency_id == supplier.agency_id)
            .ok_or(RepositoryError::NotFound)?;
        *row = supplier.clone();
        Ok(())
    }

    async fn find_by_name(
        &self,
        agency_id: AgencyId,
        name: &str,
    ) -> Result<Option<Supplier>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|s| s.agency_id == agency_id && s.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        limit: Option<i64>,
    ) -> Result<Vec<Supplier>, RepositoryError> {
        let mut rows: Vec<Supplier> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|s| s.agency_id == agency_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            rows.truncate(limit.max(0) as usize);
        }
        Ok(rows)
    }
}
