//! Itinerary records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::assistant::ItineraryPlan;
use crate::domain::foundation::{AgencyId, ClientId, ItineraryId, UserId};

/// Lifecycle status of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Booked,
    Completed,
}

impl ItineraryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryStatus::Draft => "draft",
            ItineraryStatus::Sent => "sent",
            ItineraryStatus::Approved => "approved",
            ItineraryStatus::Booked => "booked",
            ItineraryStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ItineraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItineraryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ItineraryStatus::Draft),
            "sent" => Ok(ItineraryStatus::Sent),
            "approved" => Ok(ItineraryStatus::Approved),
            "booked" => Ok(ItineraryStatus::Booked),
            "completed" => Ok(ItineraryStatus::Completed),
            other => Err(format!("unknown itinerary status: {}", other)),
        }
    }
}

/// A persisted itinerary.
///
/// Belongs to exactly one agency; the assistant pipeline never hard-deletes
/// itineraries (deletion is a separate CRUD path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub agency_id: AgencyId,
    pub client_id: Option<ClientId>,
    pub destination: String,
    /// Trip length in days.
    pub duration: i32,
    /// Plain-text summary of the generated plan.
    pub ai_generated_content: String,
    /// The full structured plan as stored JSON.
    pub ai_generated_json: serde_json::Value,
    pub status: ItineraryStatus,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Itinerary {
    /// Builds a draft itinerary from a generated plan.
    pub fn from_plan(
        agency_id: AgencyId,
        client_id: Option<ClientId>,
        created_by: UserId,
        destination: impl Into<String>,
        duration: i32,
        plan: &ItineraryPlan,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItineraryId::new(),
            agency_id,
            client_id,
            destination: destination.into(),
            duration,
            ai_generated_content: plan.summary_text(),
            ai_generated_json: serde_json::to_value(plan).unwrap_or(serde_json::Value::Null),
            status: ItineraryStatus::Draft,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        for status in [
            ItineraryStatus::Draft,
            ItineraryStatus::Sent,
            ItineraryStatus::Approved,
            ItineraryStatus::Booked,
            ItineraryStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<ItineraryStatus>(), Ok(status));
        }
        assert!("archived".parse::<ItineraryStatus>().is_err());
    }

    #[test]
    fn from_plan_builds_draft() {
        let plan = ItineraryPlan {
            content: Some("Welcome!".to_string()),
            ..Default::default()
        };
        let itinerary = Itinerary::from_plan(
            AgencyId::new(),
            Some(ClientId::new()),
            UserId::new(),
            "Paris",
            5,
            &plan,
            Utc::now(),
        );
        assert_eq!(itinerary.status, ItineraryStatus::Draft);
        assert_eq!(itinerary.destination, "Paris");
        assert_eq!(itinerary.duration, 5);
        assert_eq!(itinerary.ai_generated_content, "Welcome!");
        assert!(itinerary.ai_generated_json.is_object());
    }
}
