//! PostgreSQL implementation of ClientRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{AgencyId, ClientId};
use crate::domain::travel::Client;
use crate::ports::{ClientRepository, RepositoryError};

/// PostgreSQL implementation of ClientRepository.
#[derive(Clone)]
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_client(row: &PgRow) -> Result<Client, RepositoryError> {
    Ok(Client {
        id: ClientId::from_uuid(row.try_get::<Uuid, _>("id").map_err(RepositoryError::database)?),
        agency_id: AgencyId::from_uuid(
            row.try_get::<Uuid, _>("agency_id")
                .map_err(RepositoryError::database)?,
        ),
        full_name: row.try_get("full_name").map_err(RepositoryError::database)?,
        email: row.try_get("email").map_err(RepositoryError::database)?,
        phone: row.try_get("phone").map_err(RepositoryError::database)?,
        address: row.try_get("address").map_err(RepositoryError::database)?,
        interests: row.try_get("interests").map_err(RepositoryError::database)?,
        budget_range: row
            .try_get("budget_range")
            .map_err(RepositoryError::database)?,
        notes: row.try_get("notes").map_err(RepositoryError::database)?,
        created_at: row.try_get("created_at").map_err(RepositoryError::database)?,
        updated_at: row.try_get("updated_at").map_err(RepositoryError::database)?,
    })
}

const CLIENT_COLUMNS: &str = "id, agency_id, full_name, email, phone, address, interests, \
                              budget_range, notes, created_at, updated_at";

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn insert(&self, client: &Client) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO clients (
                id, agency_id, full_name, email, phone, address, interests,
                budget_range, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(client.id.as_uuid())
        .bind(client.agency_id.as_uuid())
        .bind(&client.full_name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.interests)
        .bind(&client.budget_range)
        .bind(&client.notes)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        Ok(())
    }

    async fn update(&self, client: &Client) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE clients SET
                full_name = $3, email = $4, phone = $5, address = $6,
                interests = $7, budget_range = $8, notes = $9, updated_at = $10
            WHERE id = $1 AND agency_id = $2
            "#,
        )
        .bind(client.id.as_uuid())
        .bind(client.agency_id.as_uuid())
        .bind(&client.full_name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.interests)
        .bind(&client.budget_range)
        .bind(&client.notes)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, agency_id: AgencyId, id: ClientId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND agency_id = $2")
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

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM clients WHERE id = $1 AND agency_id = $2",
            CLIENT_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(agency_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn search_by_name(
        &self,
        agency_id: AgencyId,
        fragment: &str,
    ) -> Result<Vec<Client>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM clients \
             WHERE agency_id = $1 AND full_name ILIKE $2 \
             ORDER BY created_at DESC",
            CLIENT_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .bind(format!("%{}%", fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        rows.iter().map(row_to_client).collect()
    }

    async fn list(
        &self,
        agency_id: AgencyId,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Client>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM clients \
             WHERE agency_id = $1 AND ($2::text IS NULL OR full_name ILIKE $2) \
             ORDER BY created_at DESC \
             LIMIT $3",
            CLIENT_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .bind(query.map(|q| format!("%{}%", q)))
        // LIMIT NULL means no limit
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        rows.iter().map(row_to_client).collect()
    }
}
