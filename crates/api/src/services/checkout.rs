//! Checkout by retrieval code.

use bellhop_core::error::CoreError;
use bellhop_core::luggage::STATUS_STORED;
use bellhop_core::types::{DbId, HotelId};
use bellhop_db::models::luggage::CodeMatch;
use bellhop_db::repositories::{AuditLogRepo, LuggageRepo};
use bellhop_db::DbPool;

use crate::error::AppResult;

/// Whether a locked row may be retrieved by `hotel_id`.
fn is_eligible(row: &CodeMatch, hotel_id: HotelId) -> bool {
    row.hotel_id == hotel_id && row.status == STATUS_STORED
}

/// Retrieves every eligible item sharing a code in one transaction.
pub struct CheckoutResolver {
    pool: DbPool,
}

impl CheckoutResolver {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Flip every `stored` row carrying `code` in the caller's tenant to
    /// `retrieved`, returning their IDs in ascending order.
    ///
    /// Foreign-tenant and already-retrieved rows are skipped. An unknown code
    /// and a code with nothing eligible are both not-found, with different
    /// messages; neither mutates anything.
    pub async fn checkout(
        &self,
        code: &str,
        hotel_id: HotelId,
        acting_username: &str,
    ) -> AppResult<Vec<DbId>> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CoreError::Validation("code is required".into()).into());
        }

        let mut tx = self.pool.begin().await?;

        let matches = LuggageRepo::lock_by_code(&mut tx, code).await?;
        if matches.is_empty() {
            return Err(CoreError::NotFound {
                entity: "Luggage",
                key: format!("with code {code}"),
            }
            .into());
        }

        let mut retrieved = Vec::new();
        for row in matches.iter().filter(|row| is_eligible(row, hotel_id)) {
            LuggageRepo::mark_retrieved(&mut tx, row.id, acting_username).await?;
            AuditLogRepo::record_retrieved(
                &mut tx,
                hotel_id,
                row.id,
                &row.guest_name,
                acting_username,
            )
            .await?;
            retrieved.push(row.id);
        }

        if retrieved.is_empty() {
            tracing::debug!(
                hotel_id,
                retrieval_code = %code,
                matched = matches.len(),
                "No eligible rows for checkout"
            );
            return Err(CoreError::NotFound {
                entity: "Stored luggage",
                key: format!("with code {code} in this hotel"),
            }
            .into());
        }

        tx.commit().await?;

        tracing::info!(
            hotel_id,
            retrieval_code = %code,
            item_count = retrieved.len(),
            "Luggage checked out"
        );

        Ok(retrieved)
    }
}
