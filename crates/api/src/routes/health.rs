use std::path::Path;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency below is ready, `degraded` otherwise.
    pub status: &'static str,
    pub db_healthy: bool,
    /// The upload root exists, is a directory and is not read-only.
    pub uploads_ready: bool,
}

async fn upload_root_ready(root: &Path) -> bool {
    match tokio::fs::metadata(root).await {
        Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
        Err(_) => false,
    }
}

/// GET /health -- database reachability and upload storage readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = bellhop_db::health_check(&state.pool).await.is_ok();
    let uploads_ready = upload_root_ready(&state.config.upload_dir).await;

    if !uploads_ready {
        tracing::warn!(
            upload_dir = %state.config.upload_dir.display(),
            "Upload root is missing or read-only"
        );
    }

    let status = if db_healthy && uploads_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        db_healthy,
        uploads_ready,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
