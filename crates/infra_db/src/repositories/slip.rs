//! Slip repository implementation
//!
//! One parameterized statement per operation against the `slips` table. The
//! store owns `id` (BIGSERIAL) and both timestamps (column defaults plus an
//! update trigger), so no statement here writes them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use domain_slip::{Slip, SlipDraft, SlipError, SlipId, SlipPort};

use crate::error::DatabaseError;
use crate::pool::ping;

const SELECT_SLIP: &str = r#"
    SELECT id, body, tags, created_at, updated_at
    FROM slips
    WHERE id = $1
"#;

const SELECT_ALL_SLIPS: &str = r#"
    SELECT id, body, tags, created_at, updated_at
    FROM slips
    ORDER BY id
"#;

const INSERT_SLIP: &str = "INSERT INTO slips (body, tags) VALUES ($1, $2)";

const UPDATE_SLIP: &str = "UPDATE slips SET body = $1, tags = $2 WHERE id = $3";

const DELETE_SLIP: &str = "DELETE FROM slips WHERE id = $1";

/// Database row for a slip
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SlipRow {
    pub id: i64,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SlipRow> for Slip {
    fn from(row: SlipRow) -> Self {
        Slip {
            id: row.id,
            body: row.body,
            tags: row.tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed implementation of the SlipPort trait
#[derive(Debug, Clone)]
pub struct SlipRepository {
    pool: PgPool,
}

impl SlipRepository {
    /// Creates a new SlipRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlipPort for SlipRepository {
    #[instrument(skip(self, draft), fields(tags = draft.tags.len()))]
    async fn create_slip(&self, draft: SlipDraft) -> Result<(), SlipError> {
        sqlx::query(INSERT_SLIP)
            .bind(&draft.body)
            .bind(&draft.tags)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_slip(&self, id: SlipId) -> Result<Slip, SlipError> {
        let row = sqlx::query_as::<_, SlipRow>(SELECT_SLIP)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(SlipError::NotFound(id))?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn get_all_slips(&self) -> Result<Vec<Slip>, SlipError> {
        let rows = sqlx::query_as::<_, SlipRow>(SELECT_ALL_SLIPS)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Slip::from).collect())
    }

    #[instrument(skip(self, draft))]
    async fn update_slip(&self, id: SlipId, draft: SlipDraft) -> Result<(), SlipError> {
        let result = sqlx::query(UPDATE_SLIP)
            .bind(&draft.body)
            .bind(&draft.tags)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        debug!(rows_affected = result.rows_affected(), "slip updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_slip(&self, id: SlipId) -> Result<(), SlipError> {
        let result = sqlx::query(DELETE_SLIP)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        debug!(rows_affected = result.rows_affected(), "slip deleted");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), SlipError> {
        ping(&self.pool).await?;
        Ok(())
    }
}
