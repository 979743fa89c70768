//! Wire types for invoice endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::travel::{Invoice, InvoiceStatus};

/// Query parameters for listing invoices.
#[derive(Debug, Default, Deserialize)]
pub struct ListInvoicesParams {
    pub client_id: Option<String>,
}

/// POST /api/invoices request body (manual creation).
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub client_id: String,
    pub total: f64,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// PUT /api/invoices/:id request body; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub total: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Invoice as returned to the SPA.
#[derive(Debug, Serialize)]
pub struct InvoiceView {
    pub id: String,
    pub client_id: String,
    pub invoice_number: String,
    pub total: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Invoice> for InvoiceView {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            client_id: invoice.client_id.to_string(),
            invoice_number: invoice.invoice_number.clone(),
            total: invoice.total,
            status: invoice.status,
            notes: invoice.notes.clone(),
            due_date: invoice.due_date,
            created_at: invoice.created_at,
        }
    }
}
