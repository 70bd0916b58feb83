//! Repository for the `luggage` table.
//!
//! Soft-deleted rows (`deleted_at IS NOT NULL`) are invisible to every method
//! here, including the retrieval-code lookup. Tenant scoping goes through the
//! owning storeroom's `hotel_id`.

use bellhop_core::luggage::{EditableFields, STATUS_RETRIEVED, STATUS_STORED};
use bellhop_core::types::{DbId, HotelId};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::luggage::{CodeMatch, CreateLuggage, Luggage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, storeroom_id, guest_name, staff_name, contact_phone, contact_email, \
                       description, quantity, special_notes, photo_urls, photo_url, \
                       retrieval_code, status, stored_at, retrieved_at, retrieved_by, \
                       created_at, updated_at";

/// Restricts a `luggage` query to rows whose storeroom belongs to a tenant.
/// The tenant id is always bound as the placeholder named in `param`.
fn in_hotel(param: &str) -> String {
    format!("storeroom_id IN (SELECT id FROM storerooms WHERE hotel_id = {param})")
}

/// Provides luggage persistence and lookups.
pub struct LuggageRepo;

impl LuggageRepo {
    // -----------------------------------------------------------------------
    // Intake
    // -----------------------------------------------------------------------

    /// Whether any live row carries `code`.
    ///
    /// Reads through the pool so it sees committed rows only; an in-flight
    /// intake transaction's rows are not visible here.
    pub async fn code_in_use(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM luggage WHERE retrieval_code = $1 AND deleted_at IS NULL)",
        )
        .bind(code)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Insert one `stored` item, returning the created row.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &CreateLuggage,
    ) -> Result<Luggage, sqlx::Error> {
        let query = format!(
            "INSERT INTO luggage \
                (storeroom_id, guest_name, staff_name, contact_phone, contact_email, \
                 description, quantity, special_notes, photo_urls, photo_url, \
                 retrieval_code, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(input.storeroom_id)
            .bind(&input.guest_name)
            .bind(&input.staff_name)
            .bind(&input.contact_phone)
            .bind(&input.contact_email)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(&input.special_notes)
            .bind(Json(&input.photo_urls))
            .bind(&input.photo_url)
            .bind(&input.retrieval_code)
            .bind(STATUS_STORED)
            .fetch_one(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Checkout
    // -----------------------------------------------------------------------

    /// Lock every live row carrying `code`, across all tenants, in ID order.
    ///
    /// Each match carries its storeroom's tenant so the caller can skip
    /// foreign rows without a second query.
    pub async fn lock_by_code(
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Vec<CodeMatch>, sqlx::Error> {
        sqlx::query_as::<_, CodeMatch>(
            "SELECT l.id, l.guest_name, l.status, s.hotel_id \
             FROM luggage l \
             JOIN storerooms s ON s.id = l.storeroom_id \
             WHERE l.retrieval_code = $1 AND l.deleted_at IS NULL \
             ORDER BY l.id \
             FOR UPDATE OF l",
        )
        .bind(code)
        .fetch_all(conn)
        .await
    }

    /// Flip a row to `retrieved`, stamping time and actor.
    pub async fn mark_retrieved(
        conn: &mut PgConnection,
        id: DbId,
        retrieved_by: &str,
    ) -> Result<Luggage, sqlx::Error> {
        let query = format!(
            "UPDATE luggage SET status = $2, retrieved_at = NOW(), retrieved_by = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(id)
            .bind(STATUS_RETRIEVED)
            .bind(retrieved_by)
            .fetch_one(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Lock a tenant's live item for update.
    pub async fn lock_for_hotel(
        conn: &mut PgConnection,
        id: DbId,
        hotel_id: HotelId,
    ) -> Result<Option<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage \
             WHERE id = $1 AND deleted_at IS NULL AND {} \
             FOR UPDATE",
            in_hotel("$2")
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(id)
            .bind(hotel_id)
            .fetch_optional(conn)
            .await
    }

    /// Overwrite the editable fields of an item.
    pub async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        fields: &EditableFields,
    ) -> Result<Luggage, sqlx::Error> {
        let query = format!(
            "UPDATE luggage SET \
                guest_name = $2, \
                contact_phone = $3, \
                description = $4, \
                special_notes = $5, \
                photo_urls = $6, \
                photo_url = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(id)
            .bind(&fields.guest_name)
            .bind(&fields.contact_phone)
            .bind(&fields.description)
            .bind(&fields.special_notes)
            .bind(Json(&fields.photo_urls))
            .bind(&fields.photo_url)
            .fetch_one(conn)
            .await
    }

    /// Soft-delete a tenant's item. Returns `true` if a live row was marked.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        hotel_id: HotelId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE luggage SET deleted_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL AND {}",
            in_hotel("$2")
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(hotel_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Find a tenant's live item by ID.
    pub async fn find_for_hotel(
        pool: &PgPool,
        id: DbId,
        hotel_id: HotelId,
    ) -> Result<Option<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage WHERE id = $1 AND deleted_at IS NULL AND {}",
            in_hotel("$2")
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(id)
            .bind(hotel_id)
            .fetch_optional(pool)
            .await
    }

    /// All of a tenant's live rows sharing `code`, in ID order.
    pub async fn list_by_code(
        pool: &PgPool,
        code: &str,
        hotel_id: HotelId,
    ) -> Result<Vec<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage \
             WHERE retrieval_code = $1 AND deleted_at IS NULL AND {} \
             ORDER BY id",
            in_hotel("$2")
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(code)
            .bind(hotel_id)
            .fetch_all(pool)
            .await
    }

    /// Distinct guest names with at least one `stored` item in the tenant.
    pub async fn list_guest_names(
        pool: &PgPool,
        hotel_id: HotelId,
    ) -> Result<Vec<String>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT guest_name FROM luggage \
             WHERE status = $2 AND deleted_at IS NULL AND {} \
             ORDER BY guest_name",
            in_hotel("$1")
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(hotel_id)
            .bind(STATUS_STORED)
            .fetch_all(pool)
            .await
    }

    /// A guest's `stored` items in the tenant, newest first.
    pub async fn list_stored_by_guest(
        pool: &PgPool,
        guest_name: &str,
        hotel_id: HotelId,
    ) -> Result<Vec<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage \
             WHERE guest_name = $1 AND status = $3 AND deleted_at IS NULL AND {} \
             ORDER BY stored_at DESC, id DESC",
            in_hotel("$2")
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(guest_name)
            .bind(hotel_id)
            .bind(STATUS_STORED)
            .fetch_all(pool)
            .await
    }

    /// Items in one storeroom, optionally filtered by status, newest first.
    ///
    /// The caller must already have checked the storeroom's tenant.
    pub async fn list_by_storeroom(
        pool: &PgPool,
        storeroom_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage \
             WHERE storeroom_id = $1 AND deleted_at IS NULL \
               AND ($2::TEXT IS NULL OR status = $2) \
             ORDER BY stored_at DESC, id DESC"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(storeroom_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }
}
