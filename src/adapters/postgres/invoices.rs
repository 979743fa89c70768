//! PostgreSQL implementation of InvoiceRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{AgencyId, ClientId, InvoiceId, UserId};
use crate::domain::travel::Invoice;
use crate::ports::{InvoiceRepository, RepositoryError};

/// PostgreSQL implementation of InvoiceRepository.
#[derive(Clone)]
pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INVOICE_COLUMNS: &str = "id, agency_id, client_id, invoice_number, total, status, \
                               notes, due_date, created_by, created_at";

fn row_to_invoice(row: &PgRow) -> Result<Invoice, RepositoryError> {
    let status: String = row.try_get("status").map_err(RepositoryError::database)?;
    Ok(Invoice {
        id: InvoiceId::from_uuid(
            row.try_get::<Uuid, _>("id").map_err(RepositoryError::database)?,
        ),
        agency_id: AgencyId::from_uuid(
            row.try_get::<Uuid, _>("agency_id")
                .map_err(RepositoryError::database)?,
        ),
        client_id: ClientId::from_uuid(
            row.try_get::<Uuid, _>("client_id")
                .map_err(RepositoryError::database)?,
        ),
        invoice_number: row
            .try_get("invoice_number")
            .map_err(RepositoryError::database)?,
        total: row.try_get("total").map_err(RepositoryError::database)?,
        status: status.parse().map_err(RepositoryError::Database)?,
        notes: row.try_get("notes").map_err(RepositoryError::database)?,
        due_date: row.try_get("due_date").map_err(RepositoryError::database)?,
        created_by: UserId::from_uuid(
            row.try_get::<Uuid, _>("created_by")
                .map_err(RepositoryError::database)?,
        ),
        created_at: row.try_get("created_at").map_err(RepositoryError::database)?,
    })
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn insert(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (
                id, agency_id, client_id, invoice_number, total, status,
                notes, due_date, created_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(invoice.id.as_uuid())
        .bind(invoice.agency_id.as_uuid())
        .bind(invoice.client_id.as_uuid())
        .bind(&invoice.invoice_number)
        .bind(invoice.total)
        .bind(invoice.status.as_str())
        .bind(&invoice.notes)
        .bind(invoice.due_date)
        .bind(invoice.created_by.as_uuid())
        .bind(invoice.created_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        Ok(())
    }

    async fn update(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices SET
                total = $3, status = $4, notes = $5, due_date = $6
            WHERE id = $1 AND agency_id = $2
            "#,
        )
        .bind(invoice.id.as_uuid())
        .bind(invoice.agency_id.as_uuid())
        .bind(invoice.total)
        .bind(invoice.status.as_str())
        .bind(&invoice.notes)
        .bind(invoice.due_date)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: InvoiceId,
    ) -> Result<Option<Invoice>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM invoices WHERE id = $1 AND agency_id = $2",
            INVOICE_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(agency_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_invoice).transpose()
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        client_id: Option<ClientId>,
    ) -> Result<Vec<Invoice>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM invoices \
             WHERE agency_id = $1 AND ($2::uuid IS NULL OR client_id = $2) \
             ORDER BY created_at DESC",
            INVOICE_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .bind(client_id.as_ref().map(|c| *c.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        rows.iter().map(row_to_invoice).collect()
    }

    async fn delete(&self, agency_id: AgencyId, id: InvoiceId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1 AND agency_id = $2")
            .bind(id.as_uuid())
            .bind(agency_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
