//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{RedirectService, ShorteningService, UrlValidator};
use crate::domain::resolver::HostResolver;
use crate::infrastructure::persistence::{PgLinkRepository, PgSequenceAllocator};

pub type AppShorteningService = ShorteningService<PgLinkRepository, PgSequenceAllocator>;
pub type AppRedirectService = RedirectService<PgLinkRepository>;

/// Services and repositories shared by all requests.
///
/// Holds no mutable state of its own; everything that changes lives in
/// PostgreSQL behind the pool.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<AppShorteningService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub link_repository: Arc<PgLinkRepository>,
    pub sequence_allocator: Arc<PgSequenceAllocator>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, resolver: Arc<dyn HostResolver>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let sequence_allocator = Arc::new(PgSequenceAllocator::new(pool));

        let shortening_service = Arc::new(ShorteningService::new(
            UrlValidator::new(resolver),
            link_repository.clone(),
            sequence_allocator.clone(),
        ));
        let redirect_service = Arc::new(RedirectService::new(link_repository.clone()));

        Self {
            shortening_service,
            redirect_service,
            link_repository,
            sequence_allocator,
        }
    }
}
