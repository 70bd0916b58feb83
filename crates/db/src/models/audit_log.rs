//! Audit log rows for the three append-only trails.

use bellhop_core::types::{DbId, HotelId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `stored_logs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredLog {
    pub id: DbId,
    pub hotel_id: HotelId,
    pub luggage_id: DbId,
    pub guest_name: String,
    pub stored_by: String,
    pub status: String,
    pub stored_at: Timestamp,
}

/// A row from `updated_logs`. Snapshots hold the editable fields before and
/// after the change.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpdatedLog {
    pub id: DbId,
    pub hotel_id: HotelId,
    pub luggage_id: DbId,
    pub updated_by: String,
    pub old_data: serde_json::Value,
    pub new_data: serde_json::Value,
    pub updated_at: Timestamp,
}

/// A row from `retrieved_logs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RetrievedLog {
    pub id: DbId,
    pub hotel_id: HotelId,
    pub luggage_id: DbId,
    pub guest_name: String,
    pub retrieved_by: String,
    pub retrieved_at: Timestamp,
}

/// DTO for appending to `updated_logs`.
#[derive(Debug, Clone)]
pub struct CreateUpdatedLog {
    pub hotel_id: HotelId,
    pub luggage_id: DbId,
    pub updated_by: String,
    pub old_data: serde_json::Value,
    pub new_data: serde_json::Value,
}
