//! Invoice records.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{AgencyId, ClientId, InvoiceId, UserId};

/// Default payment terms applied when no due date is specified.
pub const DEFAULT_DUE_DAYS: i64 = 7;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(format!("unknown invoice status: {}", other)),
        }
    }
}

/// A persisted invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub agency_id: AgencyId,
    pub client_id: ClientId,
    /// Unique human-facing number, `INV-<epoch_ms>-<0..=999>`.
    pub invoice_number: String,
    pub total: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a draft invoice with a generated number.
    ///
    /// When `due_date` is absent, payment terms default to now + 7 days.
    pub fn draft(
        agency_id: AgencyId,
        client_id: ClientId,
        total: f64,
        notes: Option<String>,
        due_date: Option<DateTime<Utc>>,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            agency_id,
            client_id,
            invoice_number: generate_invoice_number(now),
            total,
            status: InvoiceStatus::Draft,
            notes,
            due_date: due_date.or_else(|| Some(now + Duration::days(DEFAULT_DUE_DAYS))),
            created_by,
            created_at: now,
        }
    }
}

/// Generates an invoice number from the epoch-millisecond timestamp and a
/// random suffix. Collision avoidance without a central sequence; the random
/// tail disambiguates invoices created in the same millisecond.
pub fn generate_invoice_number(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("INV-{}-{}", now.timestamp_millis(), suffix)
}
