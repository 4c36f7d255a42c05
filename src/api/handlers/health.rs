//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::LINK_SEQUENCE;
use crate::domain::repositories::{LinkRepository, SequenceAllocator};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components failing
///
/// # Components Checked
///
/// 1. **Database**: counts stored links
/// 2. **Sequence**: reads the link counter without advancing it
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let sequence = check_sequence(&state).await;

    let all_healthy = database.is_ok() && sequence.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, sequence },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.link_repository.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} links stored")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

async fn check_sequence(state: &AppState) -> CheckStatus {
    match state.sequence_allocator.current(LINK_SEQUENCE).await {
        Ok(Some(value)) => CheckStatus::ok(format!("Last issued code: {value}")),
        Ok(None) => CheckStatus::ok("No codes issued yet"),
        Err(e) => CheckStatus::error(format!("Counter read failed: {e}")),
    }
}
