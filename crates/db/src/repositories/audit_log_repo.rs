//! Repository for the append-only audit trails: `stored_logs`,
//! `updated_logs` and `retrieved_logs`.

use bellhop_core::luggage::STATUS_STORED;
use bellhop_core::types::{DbId, HotelId};
use sqlx::{PgConnection, PgPool};

use crate::models::audit_log::{CreateUpdatedLog, RetrievedLog, StoredLog, UpdatedLog};

const STORED_COLUMNS: &str = "id, hotel_id, luggage_id, guest_name, stored_by, status, stored_at";
const UPDATED_COLUMNS: &str =
    "id, hotel_id, luggage_id, updated_by, old_data, new_data, updated_at";
const RETRIEVED_COLUMNS: &str =
    "id, hotel_id, luggage_id, guest_name, retrieved_by, retrieved_at";

/// Appends to and pages through the audit trails. Rows are never mutated.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Record that an item entered storage.
    pub async fn record_stored(
        conn: &mut PgConnection,
        hotel_id: HotelId,
        luggage_id: DbId,
        guest_name: &str,
        stored_by: &str,
    ) -> Result<StoredLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO stored_logs (hotel_id, luggage_id, guest_name, stored_by, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {STORED_COLUMNS}"
        );
        sqlx::query_as::<_, StoredLog>(&query)
            .bind(hotel_id)
            .bind(luggage_id)
            .bind(guest_name)
            .bind(stored_by)
            .bind(STATUS_STORED)
            .fetch_one(conn)
            .await
    }

    /// Record an edit with before/after snapshots.
    pub async fn record_updated(
        conn: &mut PgConnection,
        input: &CreateUpdatedLog,
    ) -> Result<UpdatedLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO updated_logs (hotel_id, luggage_id, updated_by, old_data, new_data) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {UPDATED_COLUMNS}"
        );
        sqlx::query_as::<_, UpdatedLog>(&query)
            .bind(input.hotel_id)
            .bind(input.luggage_id)
            .bind(&input.updated_by)
            .bind(&input.old_data)
            .bind(&input.new_data)
            .fetch_one(conn)
            .await
    }

    /// Record that an item was checked out.
    pub async fn record_retrieved(
        conn: &mut PgConnection,
        hotel_id: HotelId,
        luggage_id: DbId,
        guest_name: &str,
        retrieved_by: &str,
    ) -> Result<RetrievedLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO retrieved_logs (hotel_id, luggage_id, guest_name, retrieved_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RETRIEVED_COLUMNS}"
        );
        sqlx::query_as::<_, RetrievedLog>(&query)
            .bind(hotel_id)
            .bind(luggage_id)
            .bind(guest_name)
            .bind(retrieved_by)
            .fetch_one(conn)
            .await
    }

    /// A tenant's stored-log entries, newest first.
    pub async fn list_stored(
        pool: &PgPool,
        hotel_id: HotelId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredLog>, sqlx::Error> {
        let query = format!(
            "SELECT {STORED_COLUMNS} FROM stored_logs WHERE hotel_id = $1 \
             ORDER BY stored_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, StoredLog>(&query)
            .bind(hotel_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// A tenant's updated-log entries, newest first.
    pub async fn list_updated(
        pool: &PgPool,
        hotel_id: HotelId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UpdatedLog>, sqlx::Error> {
        let query = format!(
            "SELECT {UPDATED_COLUMNS} FROM updated_logs WHERE hotel_id = $1 \
             ORDER BY updated_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, UpdatedLog>(&query)
            .bind(hotel_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// A tenant's retrieved-log entries, newest first.
    pub async fn list_retrieved(
        pool: &PgPool,
        hotel_id: HotelId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RetrievedLog>, sqlx::Error> {
        let query = format!(
            "SELECT {RETRIEVED_COLUMNS} FROM retrieved_logs WHERE hotel_id = $1 \
             ORDER BY retrieved_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, RetrievedLog>(&query)
            .bind(hotel_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
