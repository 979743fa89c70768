//! Wire types for itinerary endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::travel::{Itinerary, ItineraryStatus};

/// PATCH /api/itineraries/:id/status request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ItineraryStatus,
}

/// Itinerary as returned to the SPA.
#[derive(Debug, Serialize)]
pub struct ItineraryView {
    pub id: String,
    pub client_id: Option<String>,
    pub destination: String,
    pub duration: i32,
    pub ai_generated_content: String,
    pub ai_generated_json: serde_json::Value,
    pub status: ItineraryStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Itinerary> for ItineraryView {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id.to_string(),
            client_id: itinerary.client_id.map(|id| id.to_string()),
            destination: itinerary.destination.clone(),
            duration: itinerary.duration,
            ai_generated_content: itinerary.ai_generated_content.clone(),
            ai_generated_json: itinerary.ai_generated_json.clone(),
            status: itinerary.status,
            created_at: itinerary.created_at,
            updated_at: itinerary.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_lowercase() {
        let request: UpdateStatusRequest =
            serde_json::from_str(r#"{"status": "sent"}"#).unwrap();
        assert_eq!(request.status, ItineraryStatus::Sent);
    }
}
