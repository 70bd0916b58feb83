//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `bellhop_core::pagination` before reaching the
/// repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?code=` for retrieval-code lookups.
#[derive(Debug, Deserialize)]
pub struct CodeParams {
    #[serde(default)]
    pub code: String,
}

/// `?guest_name=` for per-guest listings.
#[derive(Debug, Deserialize)]
pub struct GuestParams {
    #[serde(default)]
    pub guest_name: String,
}

/// `?status=` filter for storeroom item listings.
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}
