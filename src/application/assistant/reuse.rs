//! Itinerary deduplication stage.

use std::sync::Arc;

use crate::domain::foundation::AgencyId;
use crate::domain::travel::Itinerary;
use crate::ports::{ItineraryRepository, RepositoryError};

/// Looks for an existing itinerary to reuse before generating a new one.
///
/// Saves a model call when the agency already has a plan for the same
/// destination. The reused plan is served as-is, not re-personalized for
/// the new request. The check-then-generate-then-insert sequence is
/// unlocked; concurrent requests can both miss and both insert, which
/// only produces harmless duplicate draft rows.
pub struct ItineraryReuse {
    itineraries: Arc<dyn ItineraryRepository>,
}

impl ItineraryReuse {
    pub fn new(itineraries: Arc<dyn ItineraryRepository>) -> Self {
        Self { itineraries }
    }

    /// Most recent itinerary matching the destination within the agency.
    pub async fn find_reusable(
        &self,
        agency_id: AgencyId,
        destination: &str,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        let existing = self
            .itineraries
            .latest_by_destination(agency_id, destination)
            .await?;
        if let Some(itinerary) = &existing {
            tracing::debug!(
                itinerary_id = %itinerary.id,
                destination = %destination,
                "reusing existing itinerary"
            );
        }
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryItineraryRepository;
    use crate::domain::assistant::ItineraryPlan;
    use crate::domain::foundation::UserId;
    use chrono::Utc;

    fn itinerary(agency_id: AgencyId, destination: &str) -> Itinerary {
        Itinerary::from_plan(
            agency_id,
            None,
            UserId::new(),
            destination,
            5,
            &ItineraryPlan::default(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn finds_same_destination_any_casing() {
        let repo = Arc::new(InMemoryItineraryRepository::new());
        let agency = AgencyId::new();
        let stored = itinerary(agency, "Paris");
        repo.insert(&stored).await.unwrap();

        let reuse = ItineraryReuse::new(repo);
        let found = reuse.find_reusable(agency, "paris").await.unwrap();
        assert_eq!(found.unwrap().id, stored.id);
    }

    #[tokio::test]
    async fn never_reuses_across_tenants() {
        let repo = Arc::new(InMemoryItineraryRepository::new());
        repo.insert(&itinerary(AgencyId::new(), "Paris")).await.unwrap();

        let reuse = ItineraryReuse::new(repo);
        let found = reuse.find_reusable(AgencyId::new(), "paris").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn empty_store_yields_none() {
        let reuse = ItineraryReuse::new(Arc::new(InMemoryItineraryRepository::new()));
        assert!(reuse
            .find_reusable(AgencyId::new(), "Paris")
            .await
            .unwrap()
            .is_none());
    }
}
