//! In-memory ClientRepository for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AgencyId, ClientId};
use crate::domain::travel::Client;
use crate::ports::{ClientRepository, RepositoryError};

/// In-memory client store with the same tenant-scoping semantics as the
/// Postgres adapter.
#[derive(Clone, Default)]
pub struct InMemoryClientRepository {
    rows: Arc<RwLock<Vec<Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert(&self, client: &Client) -> Result<(), RepositoryError> {
        self.rows.write().await.push(client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|c| c.id == client.id && c.agency_id == client.agency_id)
            .ok_or(RepositoryError::NotFound)?;
        *row = client.clone();
        Ok(())
    }

    async fn delete(&self, agency_id: AgencyId, id: ClientId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.agency_id == agency_id));
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|c| c.id == id && c.agency_id == agency_id)
            .cloned())
    }

    async fn search_by_name(
        &self,
        agency_id: AgencyId,
        fragment: &str,
    ) -> Result<Vec<Client>, RepositoryError> {
        let mut matches: Vec<Client> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|c| c.agency_id == agency_id && c.name_matches(fragment))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Client>, RepositoryError> {
        let mut rows: Vec<Client> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|c| c.agency_id == agency_id)
            .filter(|c| query.map_or(true, |q| c.name_matches(q)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            rows.truncate(limit.max(0) as usize);
        }
        Ok(rows)
    }
}
