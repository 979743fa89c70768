//! Supplier partner directory records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AgencyId, SupplierId};

/// A supplier partner (hotel chain, DMC, airline consolidator, ...).
///
/// Creation is an upsert keyed on case-insensitive name within the agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub agency_id: AgencyId,
    pub name: String,
    /// Supplier category, free-form ("Hotel", "DMC", "Other", ...).
    pub kind: String,
    pub email: Option<String>,
    pub region: Option<String>,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    /// Creates a new active supplier for an agency.
    pub fn new(agency_id: AgencyId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: SupplierId::new(),
            agency_id,
            name: name.into(),
            kind: "Other".to_string(),
            email: None,
            region: None,
            website_url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_supplier_defaults() {
        let supplier = Supplier::new(AgencyId::new(), "Alpine DMC", Utc::now());
        assert_eq!(supplier.kind, "Other");
        assert!(supplier.is_active);
    }
}
