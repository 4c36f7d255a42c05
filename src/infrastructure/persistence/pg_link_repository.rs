//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::db_error::unique_violation_constraint;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const CODE_CONSTRAINT: &str = "urls_pkey";
const ORIGINAL_URL_CONSTRAINT: &str = "urls_original_url_key";

/// PostgreSQL repository backed by the `urls` table.
///
/// `short_url` is the primary key and `original_url` carries a unique
/// constraint, so both kinds of duplicate surface as distinct errors.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error, short_code: i64) -> AppError {
    match unique_violation_constraint(&e) {
        Some(CODE_CONSTRAINT) => AppError::DuplicateCode(short_code),
        Some(ORIGINAL_URL_CONSTRAINT) => AppError::DuplicateUrl,
        _ => AppError::Database(e),
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT original_url, short_url, created_at
            FROM urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT original_url, short_url, created_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO urls (short_url, original_url)
            VALUES ($1, $2)
            RETURNING original_url, short_url, created_at
            "#,
        )
        .bind(new_link.short_code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, new_link.short_code))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
