//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/health | GET | Liveness, version and database check |

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use super::ApiResponse;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    /// ok | error
    database: &'static str,
    /// Server time (unix ms)
    timestamp: i64,
}

async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let database = match state.db.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e.message, "Health check: database unreachable");
            "error"
        }
    };

    ApiResponse::success(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
        timestamp: shared::util::now_millis(),
    })
}
