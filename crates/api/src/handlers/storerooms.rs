//! Handlers for the `/storerooms` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bellhop_core::error::CoreError;
use bellhop_core::luggage::parse_status_filter;
use bellhop_core::types::DbId;
use bellhop_db::models::luggage::Luggage;
use bellhop_db::models::storeroom::{
    CreateStoreroom, Storeroom, StoreroomWithOccupancy, UpdateStoreroom,
};
use bellhop_db::repositories::{LuggageRepo, StoreroomRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/storerooms
///
/// Every storeroom of the caller's hotel with its current occupancy.
pub async fn list_storerooms(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StoreroomWithOccupancy>>>> {
    let rooms = StoreroomRepo::list_with_occupancy(&state.pool, auth.hotel_id).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// POST /api/v1/storerooms
pub async fn create_storeroom(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateStoreroom>,
) -> AppResult<(StatusCode, Json<DataResponse<StoreroomWithOccupancy>>)> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(CoreError::Validation("name is required".into()).into());
    }
    if input.capacity < 0 {
        return Err(CoreError::Validation("capacity must not be negative".into()).into());
    }

    let room = StoreroomRepo::create(&state.pool, admin.hotel_id, &input).await?;
    tracing::info!(
        storeroom_id = room.id,
        hotel_id = admin.hotel_id,
        capacity = room.capacity,
        "Storeroom created",
    );

    let occupancy = room.occupancy(0);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StoreroomWithOccupancy {
                storeroom: room,
                occupancy,
            },
        }),
    ))
}

/// PUT /api/v1/storerooms/{id}
///
/// Activate or deactivate a storeroom. Inactive storerooms accept no intake.
pub async fn update_storeroom(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStoreroom>,
) -> AppResult<Json<DataResponse<Storeroom>>> {
    let room = StoreroomRepo::set_active(&state.pool, id, admin.hotel_id, input.is_active)
        .await?
        .ok_or_else(|| CoreError::not_found("Storeroom", id))?;
    tracing::info!(storeroom_id = id, is_active = room.is_active, "Storeroom toggled");
    Ok(Json(DataResponse { data: room }))
}

/// GET /api/v1/storerooms/{id}/luggage?status=
pub async fn list_storeroom_luggage(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<StatusParams>,
) -> AppResult<Json<DataResponse<Vec<Luggage>>>> {
    let status = parse_status_filter(params.status.as_deref())?;
    ensure_storeroom(&state, id, &auth).await?;

    let items = LuggageRepo::list_by_storeroom(&state.pool, id, status).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/storerooms/{id}/occupancy
pub async fn get_occupancy(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StoreroomWithOccupancy>>> {
    let room = ensure_storeroom(&state, id, &auth).await?;

    let mut conn = state.pool.acquire().await?;
    let stored = StoreroomRepo::count_stored(&mut conn, id).await?;
    let occupancy = room.occupancy(stored);

    Ok(Json(DataResponse {
        data: StoreroomWithOccupancy {
            storeroom: room,
            occupancy,
        },
    }))
}

async fn ensure_storeroom(state: &AppState, id: DbId, auth: &AuthUser) -> AppResult<Storeroom> {
    let room = StoreroomRepo::find_for_hotel(&state.pool, id, auth.hotel_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Storeroom", id))?;
    Ok(room)
}
