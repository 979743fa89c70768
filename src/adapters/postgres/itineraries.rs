//! PostgreSQL implementation of ItineraryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{AgencyId, ClientId, ItineraryId, UserId};
use crate::domain::travel::{Itinerary, ItineraryStatus};
use crate::ports::{ItineraryRepository, RepositoryError};

/// PostgreSQL implementation of ItineraryRepository.
#[derive(Clone)]
pub struct PostgresItineraryRepository {
    pool: PgPool,
}

impl PostgresItineraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ITINERARY_COLUMNS: &str = "id, agency_id, client_id, destination, duration, \
                                 ai_generated_content, ai_generated_json, status, \
                                 created_by, created_at, updated_at";

fn row_to_itinerary(row: &PgRow) -> Result<Itinerary, RepositoryError> {
    let status: String = row.try_get("status").map_err(RepositoryError::database)?;
    Ok(Itinerary {
        id: ItineraryId::from_uuid(
            row.try_get::<Uuid, _>("id").map_err(RepositoryError::database)?,
        ),
        agency_id: AgencyId::from_uuid(
            row.try_get::<Uuid, _>("agency_id")
                .map_err(RepositoryError::database)?,
        ),
        client_id: row
            .try_get::<Option<Uuid>, _>("client_id")
            .map_err(RepositoryError::database)?
            .map(ClientId::from_uuid),
        destination: row
            .try_get("destination")
            .map_err(RepositoryError::database)?,
        duration: row.try_get("duration").map_err(RepositoryError::database)?,
        ai_generated_content: row
            .try_get("ai_generated_content")
            .map_err(RepositoryError::database)?,
        ai_generated_json: row
            .try_get("ai_generated_json")
            .map_err(RepositoryError::database)?,
        status: status.parse().map_err(RepositoryError::Database)?,
        created_by: UserId::from_uuid(
            row.try_get::<Uuid, _>("created_by")
                .map_err(RepositoryError::database)?,
        ),
        created_at: row.try_get("created_at").map_err(RepositoryError::database)?,
        updated_at: row.try_get("updated_at").map_err(RepositoryError::database)?,
    })
}

#[async_trait]
impl ItineraryRepository for PostgresItineraryRepository {
    async fn insert(&self, itinerary: &Itinerary) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO itineraries (
                id, agency_id, client_id, destination, duration,
                ai_generated_content, ai_generated_json, status,
                created_by, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(itinerary.id.as_uuid())
        .bind(itinerary.agency_id.as_uuid())
        .bind(itinerary.client_id.as_ref().map(|c| *c.as_uuid()))
        .bind(&itinerary.destination)
        .bind(itinerary.duration)
        .bind(&itinerary.ai_generated_content)
        .bind(&itinerary.ai_generated_json)
        .bind(itinerary.status.as_str())
        .bind(itinerary.created_by.as_uuid())
        .bind(itinerary.created_at)
        .bind(itinerary.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM itineraries WHERE id = $1 AND agency_id = $2",
            ITINERARY_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(agency_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_itinerary).transpose()
    }

    async fn latest_by_destination(
        &self,
        agency_id: AgencyId,
        destination: &str,
    ) -> Result<Option<Itinerary>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM itineraries \
             WHERE agency_id = $1 AND destination ILIKE $2 \
             ORDER BY created_at DESC \
             LIMIT 1",
            ITINERARY_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .bind(format!("%{}%", destination))
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_itinerary).transpose()
    }

    async fn latest(&self, agency_id: AgencyId) -> Result<Option<Itinerary>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM itineraries \
             WHERE agency_id = $1 \
             ORDER BY updated_at DESC \
             LIMIT 1",
            ITINERARY_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        row.as_ref().map(row_to_itinerary).transpose()
    }

    async fn list(&self, agency_id: AgencyId) -> Result<Vec<Itinerary>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM itineraries WHERE agency_id = $1 ORDER BY created_at DESC",
            ITINERARY_COLUMNS
        ))
        .bind(agency_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        rows.iter().map(row_to_itinerary).collect()
    }

    async fn update_plan(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        plan_json: &serde_json::Value,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE itineraries SET
                ai_generated_json = $3, ai_generated_content = $4, updated_at = $5
            WHERE id = $1 AND agency_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(agency_id.as_uuid())
        .bind(plan_json)
        .bind(content)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn update_status(
        &self,
        agency_id: AgencyId,
        id: ItineraryId,
        status: ItineraryStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE itineraries SET status = $3, updated_at = now() \
             WHERE id = $1 AND agency_id = $2",
        )
        .bind(id.as_uuid())
        .bind(agency_id.as_uuid())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, agency_id: AgencyId, id: ItineraryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1 AND agency_id = $2")
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
