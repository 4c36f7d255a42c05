#![allow(dead_code)]

use async_trait::async_trait;
use shorturl::domain::resolver::{HostResolver, ResolveError};
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic resolver: every host resolves except those under `.invalid`.
///
/// Counts lookups so tests can assert when DNS must not be touched.
#[derive(Default)]
pub struct StaticResolver {
    lookups: AtomicUsize,
}

impl StaticResolver {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if host.ends_with(".invalid") {
            Err(ResolveError::NoAddresses)
        } else {
            Ok(())
        }
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_resolver(pool).0
}

pub fn create_test_state_with_resolver(pool: PgPool) -> (AppState, Arc<StaticResolver>) {
    let resolver = Arc::new(StaticResolver::default());
    let state = AppState::new(Arc::new(pool), resolver.clone());
    (state, resolver)
}

pub async fn create_test_link(pool: &PgPool, short_url: i64, original_url: &str) {
    sqlx::query("INSERT INTO urls (short_url, original_url) VALUES ($1, $2)")
        .bind(short_url)
        .bind(original_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn set_counter(pool: &PgPool, name: &str, value: i64) {
    sqlx::query(
        "INSERT INTO counters (name, value) VALUES ($1, $2)
         ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(name)
    .bind(value)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn counter_exists(pool: &PgPool, name: &str) -> bool {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM counters WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
        > 0
}
