//! PostgreSQL implementation of SupplierRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{AgencyId, SupplierId};
use crate::domain::travel::Supplier;
use crate::ports::{RepositoryError, SupplierRepository};

/// PostgreSQL implementation of SupplierRepository.
#[derive(Clone)]
pub struct PostgresSupplierRepository {
    pool: PgPool,
}

impl PostgresSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SUPPLIER_COLUMNS: &str =
    "id, agency_id, name, kind, email, region, website_url, is_active, created_at, updated_at";

fn row_to_supplier(row: &PgRow) -> Result<Supplier, RepositoryError> {
    Ok(Supplier {
        id: SupplierId::from_uuid(
            row.try_get::<Uuid, _>("id").map_err(RepositoryError::database)?,
        ),
        agency_id: AgencyId::from_uuid(
            row.try_get::<Uuid, _>("agency_id")
                .map_err(RepositoryError::database)?,
        ),
        name: row.try_get("name").map_err(RepositoryError::database)?,
        kind: row.try_get("kind").map_err(RepositoryError::database)?,
        email: row.try_get("email").map_err(RepositoryError::database)?,
        region: row.try_get("region").map_err(RepositoryError::database)?,
        website_url: row
            .try_get("website_url")
            .map_err(RepositoryError::database)?,
        is_active: row.try_get("is_active").map_err(RepositoryError::database)?,
        created_at: row.try_get("created_at").map_err(RepositoryError::database)?,
        updated_at: row.try_get("updated_at").map_err(RepositoryError::database)?,
    })
}

#[async_trait]
impl SupplierRepository for PostgresSupplierRepository {
    async fn insert(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO suppliers (
                id, agency_id, name, kind, email, region, website_url,
                is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(supplier.id.as_uuid())
        .bind(supplier.agency_id.as_uuid())
        .bind(&supplier.name)
        .bind(&supplier.kind)
        .bind(&supplier.email)
        .bind(&supplier.region)
        .bind(&supplier.website_url)
        .bind(supplier.is_active)
        .bind(supplier.created_at)
        .bind(supplier.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        Ok(())
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE suppliers SET
                name = $3, kind = $4, email = $5, region = $6,
                website_url = $7, is_active = $8, updated_at = $9
            WHERE id = $1 AND agency_id = $2
            "#,
        )
        .bind(supplier.id.as_uuid())
        .bind(supplier.agency_id.as_uuid())
        .bind(&supplier.name)
        .bind(&supplier.kind)
        .bind(&supplier.email)
        .bind(&supplier.region)
        .bind(&supplier.website_url)
        .bind(supplier.is_active)
        .bind(supplier.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_by_name(
        &self,
        agency_id: AgencyId,
        name: &str,
    ) -> Result<Option<Supplier>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM suppliers WHERE agency_id = $1 AND name ILIKE $2 LIMIT 1",
            SUPPLIER_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        limit: Option<i64>,
    ) -> Result<Vec<Supplier>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM suppliers \
             WHERE agency_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2",
            SUPPLIER_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        // LIMIT NULL means no limit
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        rows.iter().map(row_to_supplier).collect()
    }
}
