//! Handlers for the `/luggage` resource.
//!
//! Intake and checkout run through the transactional services held in
//! [`AppState`]; the remaining endpoints are tenant-scoped repository calls.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bellhop_core::error::CoreError;
use bellhop_core::intake::{GuestDetails, IntakeShape, ItemSpec};
use bellhop_core::luggage::LuggageEdit;
use bellhop_core::types::DbId;
use bellhop_db::models::audit_log::CreateUpdatedLog;
use bellhop_db::models::luggage::Luggage;
use bellhop_db::repositories::{AuditLogRepo, LuggageRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{CodeParams, GuestParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /luggage`.
///
/// Either the top-level item fields describe a single item, or `items` lists
/// several. A non-empty `items` wins.
#[derive(Debug, Deserialize)]
pub struct CreateLuggageRequest {
    pub guest_name: Option<String>,
    pub staff_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    #[serde(flatten)]
    pub item: ItemSpec,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// A committed intake batch.
#[derive(Debug, Serialize)]
pub struct CreatedBatch {
    pub retrieval_code: String,
    pub luggage_ids: Vec<DbId>,
    pub items: Vec<Luggage>,
}

/// Outcome of a checkout. `luggage_id` is set only when exactly one item
/// was retrieved.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub retrieval_code: String,
    pub retrieved_count: usize,
    pub luggage_ids: Vec<DbId>,
    pub luggage_id: Option<DbId>,
}

impl CheckoutResponse {
    fn new(retrieval_code: String, luggage_ids: Vec<DbId>) -> Self {
        let luggage_id = match luggage_ids.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        Self {
            retrieval_code,
            retrieved_count: luggage_ids.len(),
            luggage_ids,
            luggage_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Intake and checkout
// ---------------------------------------------------------------------------

/// POST /api/v1/luggage
///
/// Store one or more items for a guest under a freshly allocated code.
pub async fn create_luggage(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLuggageRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedBatch>>)> {
    let guest = GuestDetails::new(
        input.guest_name,
        input.staff_name,
        input.contact_phone,
        input.contact_email,
        &auth.username,
    )?;
    let items = IntakeShape::from_parts(input.item, input.items).resolve()?;

    let outcome = state
        .intake
        .create_batch(auth.hotel_id, &auth.username, &guest, &items)
        .await?;

    let batch = CreatedBatch {
        retrieval_code: outcome.retrieval_code,
        luggage_ids: outcome.items.iter().map(|l| l.id).collect(),
        items: outcome.items,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: batch })))
}

/// POST /api/v1/luggage/checkout/{code}
///
/// Retrieve every stored item sharing `code` in the caller's hotel.
pub async fn checkout(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<CheckoutResponse>>> {
    let ids = state
        .checkout
        .checkout(&code, auth.hotel_id, &auth.username)
        .await?;
    Ok(Json(DataResponse {
        data: CheckoutResponse::new(code.trim().to_string(), ids),
    }))
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// GET /api/v1/luggage/by-code?code=
///
/// Items sharing a code in the caller's hotel. A code that only exists in
/// another hotel is reported exactly like an unknown one.
pub async fn get_by_code(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CodeParams>,
) -> AppResult<Json<DataResponse<Vec<Luggage>>>> {
    let code = params.code.trim();
    if code.is_empty() {
        return Err(CoreError::Validation("code is required".into()).into());
    }

    let items = LuggageRepo::list_by_code(&state.pool, code, auth.hotel_id).await?;
    if items.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Luggage",
            key: format!("with code {code}"),
        }
        .into());
    }
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/luggage/guests
///
/// Distinct guest names with luggage currently stored.
pub async fn list_guests(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let guests = LuggageRepo::list_guest_names(&state.pool, auth.hotel_id).await?;
    Ok(Json(DataResponse { data: guests }))
}

/// GET /api/v1/luggage/by-guest?guest_name=
pub async fn list_by_guest(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<GuestParams>,
) -> AppResult<Json<DataResponse<Vec<Luggage>>>> {
    let guest_name = params.guest_name.trim();
    if guest_name.is_empty() {
        return Err(CoreError::Validation("guest_name is required".into()).into());
    }

    let items = LuggageRepo::list_stored_by_guest(&state.pool, guest_name, auth.hotel_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/luggage/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Luggage>>> {
    let item = LuggageRepo::find_for_hotel(&state.pool, id, auth.hotel_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Luggage", id))?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// Edits
// ---------------------------------------------------------------------------

/// PUT /api/v1/luggage/{id}
///
/// Apply a partial edit. Blank fields are ignored. A real change writes one
/// updated-log entry with before/after snapshots of the editable fields.
pub async fn update_luggage(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(edit): Json<LuggageEdit>,
) -> AppResult<Json<DataResponse<Luggage>>> {
    if edit.is_empty() {
        return get_by_id(auth, State(state), Path(id)).await;
    }

    let mut tx = state.pool.begin().await?;

    let current = LuggageRepo::lock_for_hotel(&mut tx, id, auth.hotel_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Luggage", id))?;

    let before = current.editable();
    let after = edit.apply(&before);
    if after == before {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = LuggageRepo::update_fields(&mut tx, id, &after).await?;
    let log = CreateUpdatedLog {
        hotel_id: auth.hotel_id,
        luggage_id: id,
        updated_by: auth.username.clone(),
        old_data: snapshot(&before)?,
        new_data: snapshot(&after)?,
    };
    AuditLogRepo::record_updated(&mut tx, &log).await?;

    tx.commit().await?;

    tracing::info!(luggage_id = id, hotel_id = auth.hotel_id, "Luggage updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/luggage/{id}
///
/// Soft-delete an item. Admin only.
pub async fn delete_luggage(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if LuggageRepo::soft_delete(&state.pool, id, admin.hotel_id).await? {
        tracing::info!(luggage_id = id, hotel_id = admin.hotel_id, "Luggage soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Luggage", id).into())
    }
}

fn snapshot<T: Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Snapshot serialization error: {e}")))
}
