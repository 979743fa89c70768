//! Wire types for supplier endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::travel::Supplier;

/// Query parameters for listing suppliers.
#[derive(Debug, Default, Deserialize)]
pub struct ListSuppliersParams {
    pub limit: Option<i64>,
}

/// POST /api/suppliers request body. Creating a supplier whose name already
/// exists (case-insensitively) updates it instead.
#[derive(Debug, Deserialize)]
pub struct UpsertSupplierRequest {
    pub name: String,
    pub kind: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub website_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Supplier as returned to the SPA.
#[derive(Debug, Serialize)]
pub struct SupplierView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub email: Option<String>,
    pub region: Option<String>,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Supplier> for SupplierView {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id.to_string(),
            name: supplier.name.clone(),
            kind: supplier.kind.clone(),
            email: supplier.email.clone(),
            region: supplier.region.clone(),
            website_url: supplier.website_url.clone(),
            is_active: supplier.is_active,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}
