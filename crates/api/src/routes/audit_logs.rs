//! Route definitions for the `/logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit_logs;
use crate::state::AppState;

/// Routes mounted at `/logs`.
///
/// ```text
/// GET /stored      -> list_stored     (?limit, offset)
/// GET /updated     -> list_updated    (?limit, offset)
/// GET /retrieved   -> list_retrieved  (?limit, offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stored", get(audit_logs::list_stored))
        .route("/updated", get(audit_logs::list_updated))
        .route("/retrieved", get(audit_logs::list_retrieved))
}
