//! Itinerary Repository Port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RepositoryError;
use crate::domain::foundation::{AgencyId, ItineraryId};
use crate::domain::travel::{Itinerary, ItineraryStatus};

/// Tenant-scoped persistence for itineraries.
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    async fn insert(&self, itinerary: &Itinerary) -> Result<(), RepositoryError>;

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
    ) -> Result<Option<Itinerary>, RepositoryError>;

    /// Most recent itinerary whose destination matches the fragment
    /// case-insensitively, if any. The deduplication probe.
    async fn latest_by_destination(
        &self,
        agency_id: AgencyId,
        destination: &str,
    ) -> Result<Option<Itinerary>, RepositoryError>;

    /// The agency's most recently updated itinerary, if any. Used as the
    /// edit target when no explicit id was extracted.
    async fn latest(&self, agency_id: AgencyId) -> Result<Option<Itinerary>, RepositoryError>;

    async fn list(&self, agency_id: AgencyId) -> Result<Vec<Itinerary>, RepositoryError>;

    /// Replaces the stored plan and summary after an edit.
    async fn update_plan(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        plan_json: &serde_json::Value,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    async fn update_status(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        status: ItineraryStatus,
    ) -> Result<(), RepositoryError>;

    async fn delete(&self, agency_id: AgencyId, id: ItineraryId) -> Result<(), RepositoryError>;
}
