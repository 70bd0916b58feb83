//! Batched luggage intake.

use bellhop_core::error::CoreError;
use bellhop_core::intake::{GuestDetails, ResolvedItem};
use bellhop_core::retrieval_code::allocate_code;
use bellhop_core::types::{DbId, HotelId};
use bellhop_db::models::luggage::{CreateLuggage, Luggage};
use bellhop_db::models::storeroom::Storeroom;
use bellhop_db::repositories::{AuditLogRepo, LuggageRepo, StoreroomRepo};
use bellhop_db::DbPool;

use crate::error::AppResult;

/// Why a storeroom cannot take an item. Callers only ever see not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreroomRejection {
    Missing,
    ForeignTenant,
    Inactive,
}

fn admit(storeroom: Option<Storeroom>, hotel_id: HotelId) -> Result<Storeroom, StoreroomRejection> {
    let storeroom = storeroom.ok_or(StoreroomRejection::Missing)?;
    if storeroom.hotel_id != hotel_id {
        return Err(StoreroomRejection::ForeignTenant);
    }
    if !storeroom.is_active {
        return Err(StoreroomRejection::Inactive);
    }
    Ok(storeroom)
}

/// Result of a committed intake.
#[derive(Debug)]
pub struct IntakeOutcome {
    pub retrieval_code: String,
    /// Created rows, in input order.
    pub items: Vec<Luggage>,
}

/// Creates every item of a drop-off atomically under one shared code.
pub struct IntakeCoordinator {
    pool: DbPool,
}

impl IntakeCoordinator {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Persist `items` for one guest.
    ///
    /// Either every item plus its stored-log row commits, or nothing does.
    /// One unknown, foreign or inactive storeroom, or one full storeroom,
    /// aborts the whole batch. `items` must be non-empty.
    ///
    /// The code is allocated before the transaction opens: its uniqueness
    /// check reads committed rows through the pool, so a batch holds at
    /// most one connection at a time.
    pub async fn create_batch(
        &self,
        hotel_id: HotelId,
        acting_username: &str,
        guest: &GuestDetails,
        items: &[ResolvedItem],
    ) -> AppResult<IntakeOutcome> {
        if items.is_empty() {
            return Err(CoreError::Validation("at least one item is required".into()).into());
        }

        let pool = &self.pool;
        let allocated =
            allocate_code(|code| async move { LuggageRepo::code_in_use(pool, &code).await })
                .await?;
        if allocated.widened {
            tracing::warn!(
                hotel_id,
                attempts = allocated.attempts,
                "Retrieval code space exhausted, using widened code"
            );
        }
        let code = allocated.code;

        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let storeroom = self.admit_storeroom(&mut tx, item.storeroom_id, hotel_id).await?;

            let stored = StoreroomRepo::count_stored(&mut tx, storeroom.id).await?;
            if !storeroom.occupancy(stored).has_room() {
                tracing::info!(
                    hotel_id,
                    storeroom_id = storeroom.id,
                    stored,
                    capacity = storeroom.capacity,
                    "Intake rejected, storeroom full"
                );
                return Err(CoreError::CapacityExceeded(format!(
                    "Storeroom {} is full",
                    storeroom.id
                ))
                .into());
            }

            let input = CreateLuggage {
                storeroom_id: storeroom.id,
                guest_name: guest.guest_name.clone(),
                staff_name: guest.staff_name.clone(),
                contact_phone: guest.contact_phone.clone(),
                contact_email: guest.contact_email.clone(),
                description: item.description.clone(),
                quantity: item.quantity,
                special_notes: item.special_notes.clone(),
                photo_urls: item.photo_urls.clone(),
                photo_url: item.photo_url.clone(),
                retrieval_code: code.clone(),
            };
            let row = LuggageRepo::insert(&mut tx, &input).await?;
            AuditLogRepo::record_stored(&mut tx, hotel_id, row.id, &row.guest_name, acting_username)
                .await?;
            created.push(row);
        }

        tx.commit().await?;

        tracing::info!(
            hotel_id,
            retrieval_code = %code,
            item_count = created.len(),
            "Luggage batch stored"
        );

        Ok(IntakeOutcome {
            retrieval_code: code,
            items: created,
        })
    }

    async fn admit_storeroom(
        &self,
        conn: &mut sqlx::PgConnection,
        storeroom_id: DbId,
        hotel_id: HotelId,
    ) -> AppResult<Storeroom> {
        let found = StoreroomRepo::find_by_id(conn, storeroom_id).await?;
        admit(found, hotel_id).map_err(|reason| {
            tracing::debug!(storeroom_id, hotel_id, ?reason, "Storeroom rejected for intake");
            CoreError::not_found("Storeroom", storeroom_id).into()
        })
    }
}
