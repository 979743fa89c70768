//! In-memory InvoiceRepository for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AgencyId, ClientId, InvoiceId};
use crate::domain::travel::Invoice;
use crate::ports::{InvoiceRepository, RepositoryError};

/// In-memory invoice store.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceRepository {
    rows: Arc<RwLock<Vec<Invoice>>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn insert(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        self.rows.write().await.push(invoice.clone());
        Ok(())
    }

    async fn update(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|i| i.id == invoice.id && i.agency_id == invoice.agency_id)
            .ok_or(RepositoryError::NotFound)?;
        *row = invoice.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: InvoiceId,
    ) -> Result<Option<Invoice>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|i| i.id == id && i.agency_id == agency_id)
            .cloned())
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        client_id: Option<ClientId>,
    ) -> Result<Vec<Invoice>, RepositoryError> {
        let mut rows: Vec<Invoice> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|i| i.agency_id == agency_id)
            .filter(|i| client_id.map_or(true, |c| i.client_id == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete(&self, agency_id: AgencyId, id: InvoiceId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|i| !(i.id == id && i.agency_id == agency_id));
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn list_filters_by_client() {
        let repo = InMemoryInvoiceRepository::new();
        let agency = AgencyId::new();
        let client_a = ClientId::new();
        let client_b = ClientId::new();
        let now = Utc::now();
        repo.insert(&Invoice::draft(agency, client_a, 100.0, None, None, UserId::new(), now))
            .await
            .unwrap();
        repo.insert(&Invoice::draft(agency, client_b, 200.0, None, None, UserId::new(), now))
            .await
            .unwrap();

        let filtered = repo.list(agency, Some(client_a)).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].total, 100.0);

        let all = repo.list(agency, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
