//! In-memory ItineraryRepository for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AgencyId, ItineraryId};
use crate::domain::travel::{Itinerary, ItineraryStatus};
use crate::ports::{ItineraryRepository, RepositoryError};

/// In-memory itinerary store.
#[derive(Clone, Default)]
pub struct InMemoryItineraryRepository {
    rows: Arc<RwLock<Vec<Itinerary>>>,
}

impl InMemoryItineraryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows across all tenants (test assertion helper).
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryItineraryRepository {
    async fn insert(&self, itinerary: &Itinerary) -> Result<(), RepositoryError> {
        self.rows.write().await.push(itinerary.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|i| i.id == id && i.agency_id == agency_id)
            .cloned())
    }

    async fn latest_by_destination(
        &self,
        agency_id: AgencyId,
        destination: &str,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        let needle = destination.to_lowercase();
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|i| {
                i.agency_id == agency_id && i.destination.to_lowercase().contains(&needle)
            })
            .max_by_key(|i| i.created_at)
            .cloned())
    }

    async fn latest(&self, agency_id: AgencyId) -> Result<Option<Itinerary>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|i| i.agency_id == agency_id)
            .max_by_key(|i| i.updated_at)
            .cloned())
    }

    async fn list(&self, agency_id: AgencyId) -> Result<Vec<Itinerary>, RepositoryError> {
        let mut rows: Vec<Itinerary> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|i| i.agency_id == agency_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_plan(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        plan_json: &serde_json::Value,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|i| i.id == id && i.agency_id == agency_id)
            .ok_or(RepositoryError::NotFound)?;
        row.ai_generated_json = plan_json.clone();
        row.ai_generated_content = content.to_string();
        row.updated_at = updated_at;
        Ok(())
    }

    async fn update_status(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        status: ItineraryStatus,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|i| i.id == id && i.agency_id == agency_id)
            .ok_or(RepositoryError::NotFound)?;
        row.status = status;
        Ok(())
    }

    async fn delete(&self, agency_id: AgencyId, id: ItineraryId) -> Result<(), RepositoryError> {
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
    use crate::domain::assistant::ItineraryPlan;
    use crate::domain::foundation::UserId;

    fn itinerary(agency_id: AgencyId, destination: &str) -> Itinerary {
        Itinerary::from_plan(
            agency_id,
            None,
            UserId::new(),
            destination,
            3,
            &ItineraryPlan::default(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn destination_match_is_case_insensitive() {
        let repo = InMemoryItineraryRepository::new();
        let agency = AgencyId::new();
        repo.insert(&itinerary(agency, "Paris")).await.unwrap();

        let found = repo.latest_by_destination(agency, "PARIS").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn destination_match_does_not_cross_tenants() {
        let repo = InMemoryItineraryRepository::new();
        repo.insert(&itinerary(AgencyId::new(), "Paris"))
            .await
            .unwrap();

        let found = repo
            .latest_by_destination(AgencyId::new(), "paris")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn latest_by_destination_prefers_most_recent() {
        let repo = InMemoryItineraryRepository::new();
        let agency = AgencyId::new();
        let old = itinerary(agency, "Paris");
        repo.insert(&old).await.unwrap();
        let mut newer = itinerary(agency, "Paris");
        newer.created_at = old.created_at + chrono::Duration::seconds(5);
        repo.insert(&newer).await.unwrap();

        let found = repo
            .latest_by_destination(agency, "paris")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, newer.id);
    }

    #[tokio::test]
    async fn update_status_requires_matching_tenant() {
        let repo = InMemoryItineraryRepository::new();
        let row = itinerary(AgencyId::new(), "Rome");
        repo.insert(&row).await.unwrap();

        let err = repo
            .update_status(AgencyId::new(), row.id, ItineraryStatus::Sent)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
