//! Luggage entity model and DTOs.

use bellhop_core::luggage::EditableFields;
use bellhop_core::types::{DbId, HotelId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A live (non-deleted) row from the `luggage` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Luggage {
    pub id: DbId,
    pub storeroom_id: DbId,
    pub guest_name: String,
    pub staff_name: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub quantity: i32,
    pub special_notes: Option<String>,
    pub photo_urls: Json<Vec<String>>,
    pub photo_url: Option<String>,
    pub retrieval_code: String,
    pub status: String,
    pub stored_at: Timestamp,
    pub retrieved_at: Option<Timestamp>,
    pub retrieved_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Luggage {
    /// The subset of fields an edit may change.
    pub fn editable(&self) -> EditableFields {
        EditableFields {
            guest_name: self.guest_name.clone(),
            contact_phone: self.contact_phone.clone(),
            description: self.description.clone(),
            special_notes: self.special_notes.clone(),
            photo_urls: self.photo_urls.0.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

/// A row sharing a retrieval code, locked for checkout, with the tenant of
/// its storeroom.
#[derive(Debug, Clone, FromRow)]
pub struct CodeMatch {
    pub id: DbId,
    pub guest_name: String,
    pub status: String,
    pub hotel_id: HotelId,
}

/// DTO for inserting one item of an intake batch.
#[derive(Debug, Clone)]
pub struct CreateLuggage {
    pub storeroom_id: DbId,
    pub guest_name: String,
    pub staff_name: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub quantity: i32,
    pub special_notes: Option<String>,
    pub photo_urls: Vec<String>,
    pub photo_url: Option<String>,
    pub retrieval_code: String,
}
