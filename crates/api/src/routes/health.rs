use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::content::ContentSourceKind;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable; `false` when none is configured.
    pub db_healthy: bool,
    /// Active content source (`database` or `env`).
    pub content_source: &'static str,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match &state.pool {
        Some(pool) => vitrine_db::health_check(pool).await.is_ok(),
        None => false,
    };

    // Environment content is served without touching the database.
    let reads_available = db_healthy || state.content.kind() == ContentSourceKind::Env;
    let status = if reads_available { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        content_source: state.content.kind().name(),
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
