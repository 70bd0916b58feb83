//! Repository for the `storerooms` table.
//!
//! Occupancy is never stored; every read counts `stored` luggage afresh.

use bellhop_core::luggage::STATUS_STORED;
use bellhop_core::types::{DbId, HotelId};
use sqlx::{PgConnection, PgPool};

use crate::models::storeroom::{
    CreateStoreroom, Storeroom, StoreroomCountRow, StoreroomWithOccupancy,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, hotel_id, name, location, capacity, is_active, created_at, updated_at";

/// Provides tenant-scoped storeroom operations.
pub struct StoreroomRepo;

impl StoreroomRepo {
    /// Insert a new storeroom for `hotel_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        hotel_id: HotelId,
        input: &CreateStoreroom,
    ) -> Result<Storeroom, sqlx::Error> {
        let query = format!(
            "INSERT INTO storerooms (hotel_id, name, location, capacity, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storeroom>(&query)
            .bind(hotel_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.capacity)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a live storeroom by ID regardless of tenant or active flag.
    ///
    /// Callers decide how to treat a foreign or inactive result.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Storeroom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storerooms WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Storeroom>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a live storeroom owned by `hotel_id`.
    pub async fn find_for_hotel(
        pool: &PgPool,
        id: DbId,
        hotel_id: HotelId,
    ) -> Result<Option<Storeroom>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM storerooms \
             WHERE id = $1 AND hotel_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Storeroom>(&query)
            .bind(id)
            .bind(hotel_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tenant's storerooms with freshly computed occupancy, by ID.
    pub async fn list_with_occupancy(
        pool: &PgPool,
        hotel_id: HotelId,
    ) -> Result<Vec<StoreroomWithOccupancy>, sqlx::Error> {
        let rows = sqlx::query_as::<_, StoreroomCountRow>(
            "SELECT s.id, s.hotel_id, s.name, s.location, s.capacity, s.is_active, \
                    s.created_at, s.updated_at, \
                    COALESCE(c.stored_count, 0) AS stored_count \
             FROM storerooms s \
             LEFT JOIN ( \
                 SELECT storeroom_id, COUNT(*) AS stored_count FROM luggage \
                 WHERE status = $2 AND deleted_at IS NULL \
                 GROUP BY storeroom_id \
             ) c ON c.storeroom_id = s.id \
             WHERE s.hotel_id = $1 AND s.deleted_at IS NULL \
             ORDER BY s.id",
        )
        .bind(hotel_id)
        .bind(STATUS_STORED)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(StoreroomWithOccupancy::from).collect())
    }

    /// Count live luggage currently `stored` in a storeroom.
    pub async fn count_stored(
        conn: &mut PgConnection,
        storeroom_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM luggage \
             WHERE storeroom_id = $1 AND status = $2 AND deleted_at IS NULL",
        )
        .bind(storeroom_id)
        .bind(STATUS_STORED)
        .fetch_one(conn)
        .await?;
        Ok(count)
    }

    /// Set the active flag of a tenant's storeroom.
    ///
    /// Returns `None` if no live storeroom with that ID belongs to `hotel_id`.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        hotel_id: HotelId,
        is_active: bool,
    ) -> Result<Option<Storeroom>, sqlx::Error> {
        let query = format!(
            "UPDATE storerooms SET is_active = $3 \
             WHERE id = $1 AND hotel_id = $2 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storeroom>(&query)
            .bind(id)
            .bind(hotel_id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }
}
