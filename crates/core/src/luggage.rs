//! Luggage lifecycle states and edit semantics.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::intake::non_blank;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Item is in a storeroom and counts toward its occupancy.
pub const STATUS_STORED: &str = "stored";

/// Item has been checked out.
pub const STATUS_RETRIEVED: &str = "retrieved";

const VALID_STATUSES: &[&str] = &[STATUS_STORED, STATUS_RETRIEVED];

/// Validate an optional status filter, treating blank as "no filter".
pub fn parse_status_filter(status: Option<&str>) -> Result<Option<&'static str>, CoreError> {
    match status.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => VALID_STATUSES
            .iter()
            .find(|valid| **valid == s)
            .copied()
            .map(Some)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: {VALID_STATUSES:?}"
                ))
            }),
    }
}

// ---------------------------------------------------------------------------
// Edits
// ---------------------------------------------------------------------------

/// Partial update of a luggage item. Blank fields leave the item unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LuggageEdit {
    pub guest_name: Option<String>,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub special_notes: Option<String>,
    pub photo_urls: Option<Vec<String>>,
    pub photo_url: Option<String>,
}

/// The editable portion of an item, as stored. Also the snapshot shape of
/// update audit entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableFields {
    pub guest_name: String,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub special_notes: Option<String>,
    pub photo_urls: Vec<String>,
    pub photo_url: Option<String>,
}

impl LuggageEdit {
    /// Apply the edit to `current`, returning the resulting field set.
    ///
    /// A non-empty `photo_urls` replaces the whole list and its first element
    /// becomes the primary photo. Otherwise a non-blank `photo_url` replaces
    /// the primary photo and the first list element (or starts a list).
    pub fn apply(self, current: &EditableFields) -> EditableFields {
        let mut next = current.clone();

        if let Some(name) = non_blank(self.guest_name) {
            next.guest_name = name;
        }
        if let Some(phone) = non_blank(self.contact_phone) {
            next.contact_phone = Some(phone);
        }
        if let Some(description) = non_blank(self.description) {
            next.description = Some(description);
        }
        if let Some(notes) = non_blank(self.special_notes) {
            next.special_notes = Some(notes);
        }

        let replacement: Vec<String> = self
            .photo_urls
            .unwrap_or_default()
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        if !replacement.is_empty() {
            next.photo_url = replacement.first().cloned();
            next.photo_urls = replacement;
        } else if let Some(single) = non_blank(self.photo_url) {
            match next.photo_urls.first_mut() {
                Some(first) => *first = single.clone(),
                None => next.photo_urls.push(single.clone()),
            }
            next.photo_url = Some(single);
        }

        next
    }

    /// Whether the edit carries no effective change request at all.
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.guest_name)
            && blank(&self.contact_phone)
            && blank(&self.description)
            && blank(&self.special_notes)
            && blank(&self.photo_url)
            && self
                .photo_urls
                .as_ref()
                .map_or(true, |urls| urls.iter().all(|u| u.trim().is_empty()))
    }
}
