//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Landing page (`views/index.html`)
//! - `GET  /health`                - Health check: database and link counter
//! - `POST /api/shorturl`          - Shorten a URL
//! - `GET  /api/shorturl/{code}`   - Redirect to the original URL
//! - `/public/*`                   - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("views/index.html"))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shorturl_routes())
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
