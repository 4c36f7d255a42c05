//! PostgreSQL implementation of the sequence allocator.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::db_error::is_numeric_overflow;
use crate::domain::entities::Counter;
use crate::domain::repositories::SequenceAllocator;
use crate::error::AppError;

/// Sequence allocator backed by the `counters` table.
///
/// Each allocation is a single `INSERT ... ON CONFLICT DO UPDATE ... RETURNING`
/// statement. PostgreSQL serialises concurrent upserts on the same key, so
/// every caller in every process sees a distinct value.
pub struct PgSequenceAllocator {
    pool: Arc<PgPool>,
}

impl PgSequenceAllocator {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Lists every counter, ordered by name.
    pub async fn list_counters(&self) -> Result<Vec<Counter>, AppError> {
        let counters =
            sqlx::query_as::<_, Counter>("SELECT name, value FROM counters ORDER BY name")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(counters)
    }
}

#[async_trait]
impl SequenceAllocator for PgSequenceAllocator {
    async fn next(&self, counter: &str) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO counters (name, value)
            VALUES ($1, 1)
            ON CONFLICT (name) DO UPDATE SET value = counters.value + 1
            RETURNING value
            "#,
        )
        .bind(counter)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_numeric_overflow(&e) {
                AppError::SequenceExhausted {
                    counter: counter.to_string(),
                }
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn current(&self, counter: &str) -> Result<Option<i64>, AppError> {
        let value = sqlx::query_scalar::<_, i64>("SELECT value FROM counters WHERE name = $1")
            .bind(counter)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(value)
    }
}
