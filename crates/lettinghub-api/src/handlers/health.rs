//! Health check handler.

use axum::Json;
use axum::extract::State;

use lettinghub_database::connection;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_up {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
    })
}
