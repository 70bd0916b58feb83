pub mod audit_logs;
pub mod auth;
pub mod health;
pub mod luggage;
pub mod storerooms;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             current identity (requires auth)
///
/// /luggage                             create batch (POST)
/// /luggage/by-code                     items sharing a code (?code=)
/// /luggage/guests                      guest names with stored items
/// /luggage/by-guest                    stored items of a guest (?guest_name=)
/// /luggage/checkout/{code}             retrieve all items of a code (POST)
/// /luggage/{id}                        get, update, delete (delete: admin only)
///
/// /storerooms                          list, create (create: admin only)
/// /storerooms/{id}                     activate/deactivate (PUT, admin only)
/// /storerooms/{id}/luggage             items in a storeroom (?status=)
/// /storerooms/{id}/occupancy           derived occupancy
///
/// /logs/stored                         intake log (?limit, offset)
/// /logs/updated                        edit log (?limit, offset)
/// /logs/retrieved                      checkout log (?limit, offset)
///
/// /uploads                             photo upload (multipart)
/// ```
pub fn api_routes(upload_max_bytes: usize) -> Router<AppState> {
    Router::new()
        // Authentication routes (login, me).
        .nest("/auth", auth::router())
        // Luggage intake, lookup, edits and checkout.
        .nest("/luggage", luggage::router())
        // Storerooms and derived occupancy.
        .nest("/storerooms", storerooms::router())
        // Audit log listings.
        .nest("/logs", audit_logs::router())
        // Photo uploads.
        .nest("/uploads", uploads::router(upload_max_bytes))
}
