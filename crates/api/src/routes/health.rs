//! Root-level `/health` route.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use dinebook_core::tables::MAX_TABLES;
use dinebook_db::repositories::TableRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Tables in the inventory; `null` when the database is unreachable.
    pub tables: Option<i64>,
    /// Tables that can still be added before the cap is hit.
    pub table_slots_free: Option<i64>,
}

/// GET /health
///
/// Counting the inventory doubles as the database probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let tables = match TableRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            None
        }
    };

    Json(HealthResponse {
        status: if tables.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: tables.is_some(),
        tables,
        table_slots_free: tables.map(|count| (MAX_TABLES - count).max(0)),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
