//! Wire types for client endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::travel::Client;

/// Query parameters for listing clients.
#[derive(Debug, Default, Deserialize)]
pub struct ListClientsParams {
    /// Name fragment filter.
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// POST /api/clients request body.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub interests: Option<String>,
    pub budget_range: Option<String>,
    pub notes: Option<String>,
}

/// PUT /api/clients/:id request body; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateClientRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub interests: Option<String>,
    pub budget_range: Option<String>,
    pub notes: Option<String>,
}

/// Client as returned to the SPA.
///
/// Carries both `full_name` and a `name` alias; parts of the front end
/// still read the latter.
#[derive(Debug, Serialize)]
pub struct ClientView {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub interests: Option<String>,
    pub budget_range: Option<String>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Client> for ClientView {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.full_name.clone(),
            full_name: client.full_name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            interests: client.interests.clone(),
            budget_range: client.budget_range.clone(),
            notes: client.notes.clone(),
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
