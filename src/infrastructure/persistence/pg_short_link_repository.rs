//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, ShortLinkRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    short_id: String,
    original_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.short_id,
            row.original_url,
            row.created_at,
            row.click_count,
        )
    }
}

/// PostgreSQL repository for short links.
///
/// Uniqueness is enforced by the `short_links_short_id_key` constraint;
/// `insert_if_absent` relies on `ON CONFLICT DO NOTHING` so the check and
/// the insert are a single statement.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (short_id, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_id) DO NOTHING
            RETURNING id, short_id, original_url, created_at, click_count
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Inserted(row.into()),
            None => InsertOutcome::AlreadyExists,
        })
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_id, original_url, created_at, click_count
            FROM short_links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn increment_click_count(&self, short_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE short_links SET click_count = click_count + 1 WHERE short_id = $1",
        )
        .bind(short_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
