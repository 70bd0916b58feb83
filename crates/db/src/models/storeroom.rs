//! Storeroom entity model and DTOs.

use bellhop_core::occupancy::Occupancy;
use bellhop_core::types::{DbId, HotelId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live (non-deleted) row from the `storerooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Storeroom {
    pub id: DbId,
    pub hotel_id: HotelId,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Storeroom {
    /// Occupancy given a freshly counted number of `stored` items.
    pub fn occupancy(&self, stored_count: i64) -> Occupancy {
        Occupancy::new(self.capacity, stored_count)
    }
}

/// Storeroom row joined with its current stored-item count.
#[derive(Debug, Clone, FromRow)]
pub struct StoreroomCountRow {
    #[sqlx(flatten)]
    pub storeroom: Storeroom,
    pub stored_count: i64,
}

/// A storeroom enriched with derived occupancy, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct StoreroomWithOccupancy {
    #[serde(flatten)]
    pub storeroom: Storeroom,
    #[serde(flatten)]
    pub occupancy: Occupancy,
}

impl From<StoreroomCountRow> for StoreroomWithOccupancy {
    fn from(row: StoreroomCountRow) -> Self {
        let occupancy = row.storeroom.occupancy(row.stored_count);
        Self {
            storeroom: row.storeroom,
            occupancy,
        }
    }
}

/// DTO for creating a new storeroom.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoreroom {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub is_active: Option<bool>,
}

/// DTO for toggling a storeroom.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStoreroom {
    pub is_active: bool,
}
