//! Read-only access to the stored/updated/retrieved audit logs.
//!
//! All three listings are scoped to the caller's hotel and ordered newest
//! first.

use axum::extract::{Query, State};
use axum::Json;
use bellhop_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LOG_LIMIT, MAX_LOG_LIMIT};
use bellhop_db::models::audit_log::{RetrievedLog, StoredLog, UpdatedLog};
use bellhop_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn page(params: &PaginationParams) -> (i64, i64) {
    (
        clamp_limit(params.limit, DEFAULT_LOG_LIMIT, MAX_LOG_LIMIT),
        clamp_offset(params.offset),
    )
}

/// GET /api/v1/logs/stored
pub async fn list_stored(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<StoredLog>>>> {
    let (limit, offset) = page(&params);
    let logs = AuditLogRepo::list_stored(&state.pool, auth.hotel_id, limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// GET /api/v1/logs/updated
pub async fn list_updated(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<UpdatedLog>>>> {
    let (limit, offset) = page(&params);
    let logs = AuditLogRepo::list_updated(&state.pool, auth.hotel_id, limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// GET /api/v1/logs/retrieved
pub async fn list_retrieved(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<RetrievedLog>>>> {
    let (limit, offset) = page(&params);
    let logs = AuditLogRepo::list_retrieved(&state.pool, auth.hotel_id, limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}
