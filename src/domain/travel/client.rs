//! CRM client records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AgencyId, ClientId};

/// A client of the travel agency.
///
/// Scoped to exactly one agency; fuzzy lookup during assistant flows is a
/// case-insensitive substring match on `full_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub agency_id: AgencyId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Home city/address, used to seed the flight departure suggestion.
    pub address: Option<String>,
    /// Free-form interests, fed to the synthesizer for personalization.
    pub interests: Option<String>,
    pub budget_range: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new client record for an agency.
    pub fn new(agency_id: AgencyId, full_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: ClientId::new(),
            agency_id,
            full_name: full_name.into(),
            email: None,
            phone: None,
            address: None,
            interests: None,
            budget_range: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match used for fuzzy name lookup.
    pub fn name_matches(&self, fragment: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }
}
