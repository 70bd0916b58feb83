//! Intake request resolution.
//!
//! A drop-off arrives either as one implicit item described by top-level
//! fields or as an explicit `items` list. Both shapes are resolved here into a
//! single non-empty list of [`ResolvedItem`]s so the intake coordinator only
//! ever handles one shape.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of items accepted in one batch.
pub const MAX_BATCH_ITEMS: usize = 50;

// ---------------------------------------------------------------------------
// Request-side types
// ---------------------------------------------------------------------------

/// One item as described by the caller, before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSpec {
    pub storeroom_id: Option<DbId>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub special_notes: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub photo_url: Option<String>,
}

/// The two request shapes accepted by the create endpoint.
#[derive(Debug, Clone)]
pub enum IntakeShape {
    Single(ItemSpec),
    Batch(Vec<ItemSpec>),
}

impl IntakeShape {
    /// Pick the shape: a non-empty `items` list wins over the top-level item.
    pub fn from_parts(single: ItemSpec, items: Vec<ItemSpec>) -> Self {
        if items.is_empty() {
            IntakeShape::Single(single)
        } else {
            IntakeShape::Batch(items)
        }
    }

    /// Normalise into a non-empty list of items, in input order.
    pub fn resolve(self) -> Result<Vec<ResolvedItem>, CoreError> {
        match self {
            IntakeShape::Single(spec) => {
                let storeroom_id = require_storeroom(spec.storeroom_id).ok_or_else(|| {
                    CoreError::Validation(
                        "storeroom_id is required in single-item mode".to_string(),
                    )
                })?;
                Ok(vec![ResolvedItem::from_spec(storeroom_id, spec)])
            }
            IntakeShape::Batch(specs) => {
                if specs.len() > MAX_BATCH_ITEMS {
                    return Err(CoreError::Validation(format!(
                        "A batch may contain at most {MAX_BATCH_ITEMS} items"
                    )));
                }
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(index, spec)| {
                        let storeroom_id =
                            require_storeroom(spec.storeroom_id).ok_or_else(|| {
                                CoreError::Validation(format!(
                                    "items[{index}].storeroom_id is required"
                                ))
                            })?;
                        Ok(ResolvedItem::from_spec(storeroom_id, spec))
                    })
                    .collect()
            }
        }
    }
}

fn require_storeroom(id: Option<DbId>) -> Option<DbId> {
    id.filter(|id| *id > 0)
}

// ---------------------------------------------------------------------------
// Normalised item
// ---------------------------------------------------------------------------

/// An item ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub storeroom_id: DbId,
    pub description: Option<String>,
    pub quantity: i32,
    pub special_notes: Option<String>,
    pub photo_urls: Vec<String>,
    pub photo_url: Option<String>,
}

impl ResolvedItem {
    fn from_spec(storeroom_id: DbId, spec: ItemSpec) -> Self {
        let (photo_urls, photo_url) = normalize_photos(spec.photo_urls, spec.photo_url);
        Self {
            storeroom_id,
            description: non_blank(spec.description),
            quantity: normalize_quantity(spec.quantity),
            special_notes: non_blank(spec.special_notes),
            photo_urls,
            photo_url,
        }
    }
}

/// Reconcile the photo list with the legacy single-photo field.
///
/// An empty list with a singular URL becomes a one-element list. Whenever the
/// list is non-empty its first element is the primary photo.
pub fn normalize_photos(
    photo_urls: Vec<String>,
    photo_url: Option<String>,
) -> (Vec<String>, Option<String>) {
    let mut urls: Vec<String> = photo_urls
        .into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();

    if urls.is_empty() {
        if let Some(single) = non_blank(photo_url) {
            urls.push(single);
        }
    }

    let primary = urls.first().cloned();
    (urls, primary)
}

/// Quantity defaults to 1 when missing or non-positive.
pub fn normalize_quantity(quantity: Option<i32>) -> i32 {
    match quantity {
        Some(q) if q > 0 => q,
        _ => 1,
    }
}

/// Trim a string and turn blank values into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Shared guest fields
// ---------------------------------------------------------------------------

/// Fields shared by every item of a batch.
#[derive(Debug, Clone, Validate)]
pub struct GuestDetails {
    #[validate(length(min = 1, max = 255, message = "guest_name is required"))]
    pub guest_name: String,
    #[validate(length(min = 1, max = 255))]
    pub staff_name: String,
    #[validate(length(max = 64))]
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
}

impl GuestDetails {
    /// Build and validate guest details. A blank staff name falls back to the
    /// acting username.
    pub fn new(
        guest_name: Option<String>,
        staff_name: Option<String>,
        contact_phone: Option<String>,
        contact_email: Option<String>,
        acting_username: &str,
    ) -> Result<Self, CoreError> {
        let details = Self {
            guest_name: non_blank(guest_name).unwrap_or_default(),
            staff_name: non_blank(staff_name).unwrap_or_else(|| acting_username.to_string()),
            contact_phone: non_blank(contact_phone),
            contact_email: non_blank(contact_email),
        };
        details
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(details)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
