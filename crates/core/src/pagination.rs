//! Limit/offset clamping shared by list endpoints.

/// Default page size for audit log listings.
pub const DEFAULT_LOG_LIMIT: i64 = 50;

/// Upper bound on page size for audit log listings.
pub const MAX_LOG_LIMIT: i64 = 500;

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
